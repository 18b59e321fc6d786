// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::iterators::Iter;
use crate::{Array, Ix};

/// Version of the serialized form of arrays.
pub const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl<A> Serialize for Array<A>
where
    A: Copy + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", self.shape())?;
        state.serialize_field("data", &Sequence(self.iter()))?;
        state.end()
    }
}

// private iterator wrapper
struct Sequence<A>(Iter<A>);

impl<A> Serialize for Sequence<A>
where
    A: Copy + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let iter = self.0.elements();
        let mut seq = serializer.serialize_seq(Some(iter.len()))?;
        for elt in iter {
            seq.serialize_element(&elt.get())?;
        }
        seq.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Array")]
struct ArrayRepr<A> {
    v: u8,
    dim: Vec<Ix>,
    data: Vec<A>,
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Array<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Array<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ArrayRepr::<A>::deserialize(deserializer)?;
        verify_version(repr.v)?;
        Array::from_shape_vec(&repr.dim, repr.data)
            .map_err(|_| de::Error::custom("data and dimension must match in size"))
    }
}

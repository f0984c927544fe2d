//! Saved-state containers.
//!
//! A [`Parcel`] is the opaque record a host persistence container stores for
//! one view: a kind tag naming the view type that wrote it plus a JSON
//! payload. Views implement [`Persist`] to write and read their own parcels;
//! reading a parcel written by a different view type fails with
//! [`FieldError::StateMismatch`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    kind: String,
    payload: serde_json::Value,
}

impl Parcel {
    pub fn pack<T: Serialize>(kind: &str, value: &T) -> Result<Self> {
        Ok(Self {
            kind: kind.to_string(),
            payload: serde_json::to_value(value)?,
        })
    }

    /// Decodes the payload, checking that this parcel was written by `kind`.
    pub fn unpack<T: DeserializeOwned>(&self, kind: &str) -> Result<T> {
        if self.kind != kind {
            return Err(FieldError::StateMismatch {
                expected: kind.to_string(),
                found: self.kind.clone(),
            });
        }
        Ok(T::deserialize(&self.payload)?)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Save/restore capability of a view.
pub trait Persist {
    /// Kind tag written into every parcel this view produces.
    const KIND: &'static str;
    type Saved: Serialize + DeserializeOwned;

    fn save(&self) -> Self::Saved;
    fn restore(&mut self, saved: Self::Saved);

    fn save_parcel(&self) -> Result<Parcel> {
        Parcel::pack(Self::KIND, &self.save())
    }

    /// Decodes a parcel for this view type without touching any instance.
    fn read_parcel(parcel: &Parcel) -> Result<Self::Saved> {
        parcel.unpack(Self::KIND)
    }

    fn restore_parcel(&mut self, parcel: &Parcel) -> Result<()> {
        let saved = Self::read_parcel(parcel)?;
        self.restore(saved);
        Ok(())
    }
}

use crate::domain::Status;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Number::deserialize(deserializer)?;
        match value.as_i64() {
            Some(code) => Ok(Status::from(code)),
            None => Err(Error::invalid_value(Unexpected::Other(&value.to_string()), &"an integer status code")),
        }
    }
}

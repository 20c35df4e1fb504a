use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Opt;

impl<T: Serialize> Serialize for Opt<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.value() {
			Some(value) => serializer.serialize_some(value),
			None => serializer.serialize_none(),
		}
	}
}

// Goes through `Option<T>` so a missing key in a derived struct takes serde's
// option path and decodes as absent instead of raising "missing field".
impl<'de, T> Deserialize<'de> for Opt<T>
where
	T: Deserialize<'de> + Default,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Option::<T>::deserialize(deserializer).map(Self::from)
	}
}

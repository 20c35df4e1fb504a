use super::Opt;

/// Read access to a possibly absent optional value.
///
/// Implemented for [`Opt`] itself and for references, boxes and `Option`s
/// wrapping anything that implements it, so a missing container answers the
/// same way as an absent one: `exists()` is `false`, `get()` is the default.
pub trait Presence {
	/// Wrapped value type.
	type Value;

	/// Borrow the value when one was provided.
	fn value(&self) -> Option<&Self::Value>;

	/// Whether a value was provided.
	fn exists(&self) -> bool {
		self.value().is_some()
	}

	/// Provided value, otherwise the default of the value type.
	fn get(&self) -> Self::Value
	where
		Self::Value: Clone + Default,
	{
		self.value().cloned().unwrap_or_default()
	}

	/// Provided value, otherwise `fallback`.
	fn get_with_default(&self, fallback: Self::Value) -> Self::Value
	where
		Self::Value: Clone,
	{
		self.value().cloned().unwrap_or(fallback)
	}
}

impl<T> Presence for Opt<T> {
	type Value = T;

	fn value(&self) -> Option<&T> {
		Opt::value(self)
	}
}

impl<P: Presence + ?Sized> Presence for &P {
	type Value = P::Value;

	fn value(&self) -> Option<&P::Value> {
		(**self).value()
	}
}

impl<P: Presence + ?Sized> Presence for Box<P> {
	type Value = P::Value;

	fn value(&self) -> Option<&P::Value> {
		(**self).value()
	}
}

impl<P: Presence> Presence for Option<P> {
	type Value = P::Value;

	fn value(&self) -> Option<&P::Value> {
		self.as_ref().and_then(|inner| inner.value())
	}
}

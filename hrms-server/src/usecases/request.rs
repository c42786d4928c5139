//! Thin request wrapper handed from the HTTP boundary to a use case

/// Request data carrier
#[derive(Debug, Clone)]
pub struct GenericRequest<T> {
    data: T,
}

impl<T> GenericRequest<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Borrow the wrapped request data
    pub fn build(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

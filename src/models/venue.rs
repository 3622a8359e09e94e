use serde::Serialize;

/// Physical venue of an event: the (address, city, postcode) triple.
/// Two events share a venue only when all three fields are equal,
/// byte for byte. No trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub address: String,
    pub city: String,
    pub postcode: String,
}

impl Venue {
    pub fn new(address: &str, city: &str, postcode: &str) -> Self {
        Self {
            address: address.to_string(),
            city: city.to_string(),
            postcode: postcode.to_string(),
        }
    }

    /// A venue is usable for an availability check only when every
    /// field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.address.is_empty() && !self.city.is_empty() && !self.postcode.is_empty()
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}", self.address, self.postcode, self.city)
    }
}

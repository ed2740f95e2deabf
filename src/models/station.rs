use serde::{Deserialize, Serialize};
use super::StationId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    #[must_use]
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

// Stations are identified by id only; a renamed copy is still the same station
impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_id() {
        let a = Station::new(StationId(1), "Gangnam");
        let b = Station::new(StationId(1), "Yeoksam");
        let c = Station::new(StationId(2), "Gangnam");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

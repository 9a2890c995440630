//! Frontend Models
//!
//! Itinerary data structures and the seed trip.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::itinerary::renumber;

/// Opaque, stable identifier of an itinerary stop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One stop in the trip
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryItem {
    pub id: ItemId,
    /// 1-based position, always index + 1
    pub number: u32,
    pub title: String,
    pub rating: f32,
    pub review_count: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

fn stop(id: &str, title: &str, rating: f32, review_count: &str, description: &str, image: &str, tag: &str) -> ItineraryItem {
    ItineraryItem {
        id: ItemId::new(id),
        number: 0,
        title: title.to_string(),
        rating,
        review_count: review_count.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        tags: vec![tag.to_string()],
    }
}

/// The hard-coded trip loaded at startup
pub fn seed_itinerary() -> Vec<ItineraryItem> {
    renumber(vec![
        stop(
            "1",
            "India Gate",
            4.5,
            "201,124",
            "India Gate is a war memorial located in New Delhi, along the Rajpath...",
            "/imageone.jpeg?height=60&width=60",
            "Credit",
        ),
        stop(
            "2",
            "Red Fort",
            4.5,
            "169,729",
            "The Red Fort is a historical fort in the old Delhi area, on the banks of...",
            "/two.webp?height=60&width=60",
            "Credit",
        ),
        stop(
            "3",
            "Qutub Minar",
            4.4,
            "161,546",
            "Qutub Minar is a minaret or a victory tower located in the Qutub complex...",
            "/four.jpeg?height=60&width=60",
            "Credit",
        ),
        stop(
            "4",
            "Lotus Temple",
            4.6,
            "161,546",
            "Located in the national capital of New Delhi, the Lotus Temple...",
            "/three.jpeg?height=60&width=60",
            "MAPS",
        ),
    ])
}

//! UI Components
//!
//! Leptos components for the itinerary page.

mod itinerary_list;
mod itinerary_card;
mod description_editor;
mod card_menu;
mod notice;

pub use itinerary_list::ItineraryList;
pub use itinerary_card::ItineraryCard;
pub use description_editor::DescriptionEditor;
pub use card_menu::CardMenu;
pub use notice::{flash_notice, Notice};

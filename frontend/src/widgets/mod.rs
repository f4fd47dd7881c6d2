mod page_background;
mod section_card;

pub use page_background::PageBackground;
pub use section_card::SectionCard;

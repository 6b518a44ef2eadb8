use super::value_objects::ensure_present;
use super::{CatalogEntry, CheckoutState, CheckoutableItem, ItemCore, Title, ValidationError, Year};

/// 本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub core: ItemCore,
    pub author: String,
}

impl std::ops::Deref for Book {
    type Target = ItemCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl Book {
    pub fn new(title: &str, author: &str, year: &str) -> Result<Self, ValidationError> {
        ensure_present(author, "author")?;
        Ok(Self {
            core: ItemCore::new(Title::new(title)?, Year::new(year)?),
            author: author.trim().to_string(),
        })
    }
}

impl CheckoutableItem for Book {
    fn title(&self) -> &Title {
        &self.core.title
    }

    fn checkout_state(&self) -> &CheckoutState {
        &self.core.state
    }

    fn checkout_state_mut(&mut self) -> &mut CheckoutState {
        &mut self.core.state
    }
}

impl CatalogEntry for Book {
    const KIND: &'static str = "Book";
    const HEADERS: &'static str = "Title, Author, Year";

    fn row(&self) -> String {
        format!("{}, {}, {}", self.title, self.author, self.year.as_str())
    }
}

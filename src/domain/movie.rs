use super::value_objects::ensure_present;
use super::{
    CatalogEntry, CheckoutState, CheckoutableItem, ItemCore, Rating, Title, ValidationError, Year,
};

/// 映画
///
/// 評価は任意（未評価の映画は一覧で`Unrated`と表示される）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub core: ItemCore,
    pub director: String,
    pub rating: Option<Rating>,
}

impl std::ops::Deref for Movie {
    type Target = ItemCore;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl Movie {
    pub fn new(
        title: &str,
        year: &str,
        director: &str,
        rating: Option<u8>,
    ) -> Result<Self, ValidationError> {
        ensure_present(director, "director")?;
        Ok(Self {
            core: ItemCore::new(Title::new(title)?, Year::new(year)?),
            director: director.trim().to_string(),
            rating: rating.map(Rating::try_from).transpose()?,
        })
    }

    pub fn rated(
        title: &str,
        year: &str,
        director: &str,
        rating: u8,
    ) -> Result<Self, ValidationError> {
        Self::new(title, year, director, Some(rating))
    }

    pub fn unrated(title: &str, year: &str, director: &str) -> Result<Self, ValidationError> {
        Self::new(title, year, director, None)
    }
}

impl CheckoutableItem for Movie {
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

impl CatalogEntry for Movie {
    const KIND: &'static str = "Movie";
    const HEADERS: &'static str = "Title, Director, Year, Rating";

    fn row(&self) -> String {
        let rating = match self.rating {
            Some(rating) => rating.value().to_string(),
            None => "Unrated".to_string(),
        };
        format!(
            "{}, {}, {}, {}",
            self.title,
            self.director,
            self.year.as_str(),
            rating
        )
    }
}

//! Search form state: live inputs vs. the committed query

use crate::weather::SearchQuery;

/// Search form inputs and the last committed query
#[derive(Debug, Default)]
pub struct SearchForm {
    /// Text typed into the city field
    pub city_input: String,
    /// Country code picked in the country selector
    pub country_input: String,
    /// Query locked in by the last valid submission
    committed: Option<SearchQuery>,
    /// Whether the cards are shown
    submitted: bool,
}

impl SearchForm {
    pub fn committed(&self) -> Option<&SearchQuery> {
        self.committed.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Handle the search button.
    ///
    /// With both inputs non-blank the trimmed pair is committed and the cards are
    /// shown. Returns the query the cards must load, or `None` when nothing needs
    /// fetching: either the form was rejected (cards hidden, committed query kept)
    /// or the same pair was resubmitted while the cards were already showing it.
    pub fn submit(&mut self) -> Option<SearchQuery> {
        let city = self.city_input.trim();
        let country = self.country_input.trim();

        if city.is_empty() || country.is_empty() {
            tracing::debug!("Search rejected: city or country is blank");
            self.submitted = false;
            return None;
        }

        let query = SearchQuery::new(city, country);
        let unchanged = self.submitted && self.committed.as_ref() == Some(&query);

        self.committed = Some(query.clone());
        self.submitted = true;

        if unchanged {
            tracing::debug!("Search unchanged: {}", query);
            None
        } else {
            tracing::info!("Search committed: {}", query);
            Some(query)
        }
    }
}

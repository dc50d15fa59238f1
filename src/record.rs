// src/record.rs
//
// One extracted review and the fixed column layout it is exported with.

use std::collections::BTreeMap;

use crate::core::sanitize::normalize_ascii;

/// Output columns, in export order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Appearance,
    Aroma,
    Taste,
    Palate,
    Total,
    Type,
    Brewery,
    Pros,
    Cons,
    Conclusion,
    Alcohol,
    Ibu,
    Size,
    DateReviewed,
    Reviewer,
    Categories,
    Tags,
    ReviewText,
    Url,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::Name, Field::Appearance, Field::Aroma, Field::Taste, Field::Palate,
        Field::Total, Field::Type, Field::Brewery, Field::Pros, Field::Cons,
        Field::Conclusion, Field::Alcohol, Field::Ibu, Field::Size,
        Field::DateReviewed, Field::Reviewer, Field::Categories, Field::Tags,
        Field::ReviewText, Field::Url,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Appearance => "Appearance",
            Field::Aroma => "Aroma",
            Field::Taste => "Taste",
            Field::Palate => "Palate",
            Field::Total => "Total",
            Field::Type => "Type",
            Field::Brewery => "Brewery",
            Field::Pros => "Pros",
            Field::Cons => "Cons",
            Field::Conclusion => "Conclusion",
            Field::Alcohol => "Alcohol",
            Field::Ibu => "IBU",
            Field::Size => "Size",
            Field::DateReviewed => "Date Reviewed",
            Field::Reviewer => "Reviewer",
            Field::Categories => "Categories",
            Field::Tags => "Tags",
            Field::ReviewText => "Review Text",
            Field::Url => "URL",
        }
    }

    pub fn headers() -> Vec<String> {
        Field::ALL.iter().map(|f| s!(f.label())).collect()
    }
}

/// Ratings as the page reports them. The five enumerated criteria get their
/// own slots, anything else (`Flavour`, `Mouthfeel`, ...) lands in `extra`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ratings {
    pub appearance: Option<f64>,
    pub aroma: Option<f64>,
    pub taste: Option<f64>,
    pub palate: Option<f64>,
    pub total: Option<f64>,
    pub extra: BTreeMap<String, f64>,
}

impl Ratings {
    /// Store a score under a title-cased label.
    pub fn set(&mut self, label: &str, score: f64) {
        match label {
            "Appearance" => self.appearance = Some(score),
            "Aroma" => self.aroma = Some(score),
            "Taste" => self.taste = Some(score),
            "Palate" => self.palate = Some(score),
            "Total" => self.total = Some(score),
            other => { self.extra.insert(s!(other), score); }
        }
    }

    /// Score for any label, enumerated or extra.
    pub fn get(&self, label: &str) -> Option<f64> {
        match label {
            "Appearance" => self.appearance,
            "Aroma" => self.aroma,
            "Taste" => self.taste,
            "Palate" => self.palate,
            "Total" => self.total,
            other => self.extra.get(other).copied(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Review {
    pub name: Option<String>,
    pub brewery: Option<String>,
    pub ratings: Ratings,
    pub beer_type: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub conclusion: Option<String>,
    pub alcohol: Option<String>,
    pub ibu: Option<String>,
    pub size: Option<String>,
    pub date_reviewed: Option<String>,
    pub reviewer: Option<String>,
    pub categories: Option<String>,
    pub tags: Option<String>,
    pub review_text: Option<String>,
    pub url: String,
}

/// `4.5` → `"4.5"`, `3.0` → `"3.0"`.
fn fmt_rating(v: f64) -> String {
    format!("{v:?}")
}

impl Review {
    /// Raw cell for one column; `None` when the page did not provide it.
    pub fn cell(&self, field: Field) -> Option<String> {
        let text = |v: &Option<String>| v.clone();
        match field {
            Field::Name => text(&self.name),
            Field::Appearance => self.ratings.appearance.map(fmt_rating),
            Field::Aroma => self.ratings.aroma.map(fmt_rating),
            Field::Taste => self.ratings.taste.map(fmt_rating),
            Field::Palate => self.ratings.palate.map(fmt_rating),
            Field::Total => self.ratings.total.map(fmt_rating),
            Field::Type => text(&self.beer_type),
            Field::Brewery => text(&self.brewery),
            Field::Pros => text(&self.pros),
            Field::Cons => text(&self.cons),
            Field::Conclusion => text(&self.conclusion),
            Field::Alcohol => text(&self.alcohol),
            Field::Ibu => text(&self.ibu),
            Field::Size => text(&self.size),
            Field::DateReviewed => text(&self.date_reviewed),
            Field::Reviewer => text(&self.reviewer),
            Field::Categories => text(&self.categories),
            Field::Tags => text(&self.tags),
            Field::ReviewText => text(&self.review_text),
            Field::Url => Some(self.url.clone()),
        }
    }

    /// Nothing but the URL: no column and no extra rating was found.
    pub fn is_blank(&self) -> bool {
        self.ratings.extra.is_empty()
            && Field::ALL.iter().all(|&f| f == Field::Url || self.cell(f).is_none())
    }

    /// Export row: every column in `Field::ALL` order, ASCII-normalized,
    /// missing values as empty cells. Extra ratings are not exported.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .map(|&f| self.cell(f).map(|v| normalize_ascii(&v)).unwrap_or_default())
            .collect()
    }
}

//! Paging parameters and page envelope

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    config::PaginationConfig,
    error::{AppError, AppResult},
    models::book::BookResponse,
};

/// Sortable book properties, named as they appear in the JSON API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    Name,
    Author,
    Publisher,
    YearReleased,
}

impl SortProperty {
    pub fn parse(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "author" => Some(Self::Author),
            "publisher" => Some(Self::Publisher),
            "yearReleased" => Some(Self::YearReleased),
            _ => None,
        }
    }

    /// Column name in the `books` table
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Author => "author",
            Self::Publisher => "publisher",
            Self::YearReleased => "year_released",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub property: SortProperty,
    pub descending: bool,
}

/// Raw query parameters of `GET /books`
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 20)
    pub size: Option<i64>,
    /// Sort criteria: `property[,property...][,asc|desc]`, repeatable
    #[serde(default)]
    pub sort: Vec<String>,
}

/// Normalized paging request handed to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl PageQuery {
    /// Apply defaults and limits, and parse the sort expression.
    pub fn resolve(&self, limits: &PaginationConfig) -> AppResult<PageRequest> {
        let page = self.page.unwrap_or(0).max(0);
        let size = match self.size {
            Some(size) if size >= 1 => size.min(limits.max_size),
            _ => limits.default_size,
        };
        let mut sort = Vec::new();
        for expr in &self.sort {
            sort.extend(parse_sort(expr)?);
        }

        Ok(PageRequest { page, size, sort })
    }
}

fn parse_sort(expr: &str) -> AppResult<Vec<SortOrder>> {
    let mut tokens: Vec<&str> = expr
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let mut descending = false;
    if tokens.len() > 1 {
        if let Some(last) = tokens.last() {
            if last.eq_ignore_ascii_case("desc") {
                descending = true;
                tokens.pop();
            } else if last.eq_ignore_ascii_case("asc") {
                tokens.pop();
            }
        }
    }

    tokens
        .into_iter()
        .map(|token| {
            SortProperty::parse(token)
                .map(|property| SortOrder { property, descending })
                .ok_or_else(|| {
                    AppError::Internal(format!("No property '{}' found for type 'Book'", token))
                })
        })
        .collect()
}

/// One page of books
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub content: Vec<BookResponse>,
    /// Total number of books in the table
    pub total_elements: i64,
    pub total_pages: i64,
    /// Zero-based index of this page
    pub number: i64,
    /// Requested page size
    pub size: i64,
    /// Number of books on this page
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl BookPage {
    pub fn new(content: Vec<BookResponse>, request: &PageRequest, total_elements: i64) -> Self {
        let total_pages = if request.size > 0 {
            (total_elements + request.size - 1) / request.size
        } else {
            1
        };

        Self {
            number_of_elements: content.len() as i64,
            empty: content.is_empty(),
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            content,
        }
    }
}

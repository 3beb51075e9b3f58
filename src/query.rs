//! Validation and encoding for list-endpoint query parameters.
//!
//! Collection endpoints accept seven optional parameters. [`ListQuery`] collects them as
//! raw strings, [`ListQuery::validate`] checks each one and produces
//! [`QueryParameters`], and [`QueryParameters::to_query_string`] percent-encodes the
//! result. Validation never touches the network, so a rejected parameter fails before any
//! request is built.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{_prelude::*, error::ValidationError};

/// Field names a `filter` expression must reference at least one of.
pub const FILTER_FIELDS: [&str; 3] = ["safeName", "modificationTime", "secretModificationTime"];
/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// The fixed vocabulary of list-query keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryParam {
	/// Free-text search, passed through.
	Search,
	/// Search mode, see [`SearchType`].
	SearchType,
	/// Sort expression, passed through.
	Sort,
	/// Filter expression over [`FILTER_FIELDS`].
	Filter,
	/// Named saved filter, see [`SavedFilter`].
	SavedFilter,
	/// Number of records to skip.
	Offset,
	/// Page size.
	Limit,
}
impl QueryParam {
	/// Every key in wire order.
	pub const ALL: [QueryParam; 7] = [
		QueryParam::Search,
		QueryParam::SearchType,
		QueryParam::Sort,
		QueryParam::Filter,
		QueryParam::SavedFilter,
		QueryParam::Offset,
		QueryParam::Limit,
	];

	/// Returns the key as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			QueryParam::Search => "search",
			QueryParam::SearchType => "searchType",
			QueryParam::Sort => "sort",
			QueryParam::Filter => "filter",
			QueryParam::SavedFilter => "savedfilter",
			QueryParam::Offset => "offset",
			QueryParam::Limit => "limit",
		}
	}
}
impl Display for QueryParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Accepted `searchType` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
	/// Match anywhere in the value (service default).
	Contains,
	/// Match at the start of the value.
	StartsWith,
}
impl SearchType {
	/// Returns the value as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			SearchType::Contains => "contains",
			SearchType::StartsWith => "startswith",
		}
	}
}
impl FromStr for SearchType {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"contains" => Ok(SearchType::Contains),
			"startswith" => Ok(SearchType::StartsWith),
			_ => Err(ValidationError::SearchType(s.into())),
		}
	}
}
impl Display for SearchType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

macro_rules! def_saved_filters {
	($($variant:ident),+ $(,)?) => {
		/// Named saved filters understood by the accounts list endpoint.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum SavedFilter {
			$(
				#[doc = concat!("The `", stringify!($variant), "` saved filter.")]
				$variant,
			)+
		}
		impl SavedFilter {
			/// Every saved filter, in the service's documented order.
			pub const ALL: &'static [SavedFilter] = &[$(SavedFilter::$variant),+];

			/// Returns the value as sent on the wire.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(SavedFilter::$variant => stringify!($variant),)+
				}
			}
		}
		impl FromStr for SavedFilter {
			type Err = ValidationError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$(stringify!($variant) => Ok(SavedFilter::$variant),)+
					_ => Err(ValidationError::SavedFilter(s.into())),
				}
			}
		}
	};
}

def_saved_filters! {
	Regular,
	Recently,
	New,
	Link,
	Deleted,
	PolicyFailures,
	AccessedByUsers,
	ModifiedByUsers,
	ModifiedByCPM,
	DisabledPasswordByUser,
	DisabledPasswordByCPM,
	ScheduledForChange,
	ScheduledForVerify,
	ScheduledForReconcile,
	SuccessfullyReconciled,
	FailedChange,
	FailedVerify,
	FailedReconcile,
	LockedOrNew,
	Locked,
	Favorites,
	DeleteInsightStatus,
}

impl Display for SavedFilter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Raw, unvalidated list-query inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
	/// Free-text search.
	pub search: Option<String>,
	/// `contains` or `startswith`.
	pub search_type: Option<String>,
	/// Sort expression, e.g. `userName desc`.
	pub sort: Option<String>,
	/// Filter expression, e.g. `safeName eq mysafe1`.
	pub filter: Option<String>,
	/// Saved filter name.
	pub saved_filter: Option<String>,
	/// Records to skip.
	pub offset: Option<String>,
	/// Page size.
	pub limit: Option<String>,
}
impl ListQuery {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the free-text search.
	pub fn search(mut self, value: impl Into<String>) -> Self {
		self.search = Some(value.into());

		self
	}

	/// Sets the search mode.
	pub fn search_type(mut self, value: impl Into<String>) -> Self {
		self.search_type = Some(value.into());

		self
	}

	/// Sets the sort expression.
	pub fn sort(mut self, value: impl Into<String>) -> Self {
		self.sort = Some(value.into());

		self
	}

	/// Sets the filter expression.
	pub fn filter(mut self, value: impl Into<String>) -> Self {
		self.filter = Some(value.into());

		self
	}

	/// Sets the saved filter name.
	pub fn saved_filter(mut self, value: impl Into<String>) -> Self {
		self.saved_filter = Some(value.into());

		self
	}

	/// Sets the number of records to skip.
	pub fn offset(mut self, value: impl ToString) -> Self {
		self.offset = Some(value.to_string());

		self
	}

	/// Sets the page size.
	pub fn limit(mut self, value: impl ToString) -> Self {
		self.limit = Some(value.to_string());

		self
	}

	/// Checks every present parameter, stopping at the first rejection.
	pub fn validate(&self) -> Result<QueryParameters, ValidationError> {
		let mut params = QueryParameters::default();

		if let Some(search) = &self.search {
			params.insert(QueryParam::Search, search);
		}
		if let Some(search_type) = &self.search_type {
			params.insert(QueryParam::SearchType, search_type.parse::<SearchType>()?.as_str());
		}
		if let Some(sort) = &self.sort {
			params.insert(QueryParam::Sort, sort);
		}
		if let Some(filter) = &self.filter {
			validate_filter(filter)?;
			params.insert(QueryParam::Filter, filter);
		}
		if let Some(saved_filter) = &self.saved_filter {
			params.insert(QueryParam::SavedFilter, saved_filter.parse::<SavedFilter>()?.as_str());
		}
		if let Some(offset) = &self.offset {
			validate_offset(offset)?;
			params.insert(QueryParam::Offset, offset);
		}
		if let Some(limit) = &self.limit {
			validate_limit(limit)?;
			params.insert(QueryParam::Limit, limit);
		}

		Ok(params)
	}

	/// Validates and renders the query string, `?`-prefixed when non-empty.
	pub fn to_query_string(&self) -> Result<String, ValidationError> {
		self.validate().map(|params| params.to_query_string())
	}
}

/// Validated list-query parameters keyed by [`QueryParam`].
///
/// Values can only enter through [`ListQuery::validate`], so every stored pair has
/// already passed its rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters(BTreeMap<QueryParam, String>);
impl QueryParameters {
	fn insert(&mut self, param: QueryParam, value: impl Into<String>) {
		self.0.insert(param, value.into());
	}

	/// Returns the validated value for `param`, if present.
	pub fn get(&self, param: QueryParam) -> Option<&str> {
		self.0.get(&param).map(String::as_str)
	}

	/// Number of present parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameter is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates `(wire key, value)` pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.0.iter().map(|(param, value)| (param.as_str(), value.as_str()))
	}

	/// Percent-encodes the pairs as `key=value` joined by `&`, without a leading `?`.
	pub fn encode(&self) -> String {
		Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}

	/// Renders `?{encoded}`, or an empty string when no parameter is present.
	pub fn to_query_string(&self) -> String {
		if self.is_empty() { String::new() } else { format!("?{}", self.encode()) }
	}
}

fn validate_filter(filter: &str) -> Result<(), ValidationError> {
	if FILTER_FIELDS.iter().any(|field| filter.contains(field)) {
		Ok(())
	} else {
		Err(ValidationError::Filter(filter.into()))
	}
}

fn validate_offset(offset: &str) -> Result<(), ValidationError> {
	match offset.parse::<i64>() {
		Ok(value) if value >= 0 => Ok(()),
		_ => Err(ValidationError::Offset(offset.into())),
	}
}

fn validate_limit(limit: &str) -> Result<(), ValidationError> {
	match limit.parse::<i64>() {
		Ok(value) if (0..=MAX_LIMIT).contains(&value) => Ok(()),
		_ => Err(ValidationError::Limit(limit.into())),
	}
}

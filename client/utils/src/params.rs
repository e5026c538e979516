//! Filtering, sorting and pagination parameters for list requests.
use std::fmt;
use std::str::FromStr;

/// Number of items requested for each page when listing resources.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// A list filter expression could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum InvalidFilter {
    #[error("filter '{0}' must be in the format property[:operator]=value[,value]")]
    Format(String),

    #[error("unknown filter operator '{0}'")]
    Operator(String),

    #[error("sort '{0}' must be in the format property[:asc|:desc]")]
    Sort(String),
}

/// Comparison operators supported by list filters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Operator {
    #[default]
    Eq,
    Lk,
    Gt,
    Lt,
    In,
    Neq,
    Nin,
    Nlk,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Eq => "eq",
            Self::Lk => "lk",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::In => "in",
            Self::Neq => "neq",
            Self::Nin => "nin",
            Self::Nlk => "nlk",
        };
        f.write_str(operator)
    }
}

impl FromStr for Operator {
    type Err = InvalidFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "eq" => Ok(Self::Eq),
            "lk" => Ok(Self::Lk),
            "gt" => Ok(Self::Gt),
            "lt" => Ok(Self::Lt),
            "in" => Ok(Self::In),
            "neq" => Ok(Self::Neq),
            "nin" => Ok(Self::Nin),
            "nlk" => Ok(Self::Nlk),
            _ => Err(InvalidFilter::Operator(value.to_string())),
        }
    }
}

/// Restrict listed resources to those with a matching property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    pub operator: Operator,
    pub property: String,
    pub values: Vec<String>,
}

impl Filter {
    /// Filter resources with a property equal to the given value.
    pub fn eq<S1, S2>(property: S1, value: S2) -> Filter
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Filter {
            operator: Operator::Eq,
            property: property.into(),
            values: vec![value.into()],
        }
    }

    /// Encode the filter as a query string pair.
    pub fn query_pair(&self) -> (String, String) {
        let key = format!("{}:{}", self.property, self.operator);
        (key, self.values.join(","))
    }
}

impl FromStr for Filter {
    type Err = InvalidFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (key, values) = value
            .split_once('=')
            .ok_or_else(|| InvalidFilter::Format(value.to_string()))?;
        let (property, operator) = match key.split_once(':') {
            None => (key, Operator::Eq),
            Some((property, operator)) => (property, operator.parse()?),
        };
        if property.is_empty() || values.is_empty() {
            return Err(InvalidFilter::Format(value.to_string()));
        }
        let values = values.split(',').map(String::from).collect();
        Ok(Filter {
            operator,
            property: property.to_string(),
            values,
        })
    }
}

/// Order listed resources by a property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sort {
    pub descending: bool,
    pub property: String,
}

impl Sort {
    /// Encode the sort as a query string pair.
    pub fn query_pair(&self) -> (String, String) {
        let direction = if self.descending { "desc" } else { "asc" };
        (
            String::from("sort"),
            format!("{}:{}", self.property, direction),
        )
    }
}

impl FromStr for Sort {
    type Err = InvalidFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (property, descending) = match value.split_once(':') {
            None => (value, false),
            Some((property, "asc")) => (property, false),
            Some((property, "desc")) => (property, true),
            Some(_) => return Err(InvalidFilter::Sort(value.to_string())),
        };
        if property.is_empty() {
            return Err(InvalidFilter::Sort(value.to_string()));
        }
        Ok(Sort {
            descending,
            property: property.to_string(),
        })
    }
}

/// Parameters attached to list requests.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListParameters {
    pub filters: Vec<Filter>,
    pub per_page: Option<u32>,
    pub sort: Option<Sort>,
}

impl ListParameters {
    /// List parameters with a single filter.
    pub fn filtered(filter: Filter) -> ListParameters {
        ListParameters {
            filters: vec![filter],
            ..Default::default()
        }
    }

    /// Encode the parameters for the requested page as query string pairs.
    pub fn query(&self, page: u32) -> Vec<(String, String)> {
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        let mut query = vec![
            (String::from("page"), page.to_string()),
            (String::from("per_page"), per_page.to_string()),
        ];
        query.extend(self.filters.iter().map(Filter::query_pair));
        if let Some(sort) = &self.sort {
            query.push(sort.query_pair());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use super::InvalidFilter;
    use super::ListParameters;
    use super::Operator;
    use super::Sort;

    #[test]
    fn filter_defaults_to_eq() {
        let filter: Filter = "name=example.com".parse().unwrap();
        assert_eq!(filter, Filter::eq("name", "example.com"));
        assert_eq!(
            filter.query_pair(),
            ("name:eq".to_string(), "example.com".to_string())
        );
    }

    #[test]
    fn filter_with_operator_and_values() {
        let filter: Filter = "id:in=1,2,3".parse().unwrap();
        assert_eq!(filter.operator, Operator::In);
        assert_eq!(filter.values, vec!["1", "2", "3"]);
        assert_eq!(filter.query_pair().1, "1,2,3");
    }

    #[test]
    fn filter_value_may_contain_colons() {
        let filter: Filter = "created_at:gt=2020-01-01T00:00:00".parse().unwrap();
        assert_eq!(filter.operator, Operator::Gt);
        assert_eq!(filter.values, vec!["2020-01-01T00:00:00"]);
    }

    #[test]
    fn filter_without_value_is_invalid() {
        let error = "name".parse::<Filter>().unwrap_err();
        assert!(matches!(error, InvalidFilter::Format(_)));
        let error = "name=".parse::<Filter>().unwrap_err();
        assert!(matches!(error, InvalidFilter::Format(_)));
    }

    #[test]
    fn filter_with_unknown_operator() {
        let error = "name:like=x".parse::<Filter>().unwrap_err();
        assert_eq!(error.to_string(), "unknown filter operator 'like'");
    }

    #[test]
    fn sort_directions() {
        let sort: Sort = "name".parse().unwrap();
        assert!(!sort.descending);
        let sort: Sort = "name:desc".parse().unwrap();
        assert_eq!(sort.query_pair().1, "name:desc");
        assert!("name:sideways".parse::<Sort>().is_err());
    }

    #[test]
    fn list_query_includes_everything() {
        let params = ListParameters {
            filters: vec![Filter::eq("name", "foo")],
            per_page: Some(10),
            sort: Some("id:desc".parse().unwrap()),
        };
        let query = params.query(2);
        let query: Vec<(&str, &str)> = query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("page", "2"),
                ("per_page", "10"),
                ("name:eq", "foo"),
                ("sort", "id:desc"),
            ]
        );
    }
}

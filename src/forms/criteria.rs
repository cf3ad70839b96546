//! Parsing of `GET /menus` query parameters.
//!
//! Filters use the `<field>.<operator>=<value>` convention, e.g.
//! `label.contains=home` or `position.greaterThan=2`. `in` and `notIn` take a
//! comma separated list. Paging uses `page`, `size` and the repeatable
//! `sort=<property>(,<property>)*(,asc|desc)`.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::criteria::{MenuCriteria, MenuSortField};
use crate::domain::filter::{Filter, RangeFilter, StringFilter};
use crate::pagination::{DEFAULT_PAGE_SIZE, PageRequest, Sort, SortDirection};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("unknown filter field `{0}`")]
    UnknownField(String),
    #[error("unsupported operator `{operator}` for field `{field}`")]
    UnknownOperator { field: String, operator: String },
    #[error("invalid value `{value}` for `{parameter}`")]
    InvalidValue { parameter: String, value: String },
    #[error("unknown sort property `{0}`")]
    UnknownSortProperty(String),
    #[error("malformed query string: {0}")]
    Malformed(String),
}

/// Criteria and paging extracted from one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuQuery {
    pub criteria: MenuCriteria,
    pub page: PageRequest,
}

impl MenuQuery {
    /// Decodes a raw (percent-encoded) query string.
    pub fn from_query_string(query: &str) -> Result<Self, CriteriaError> {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query)
            .map_err(|e| CriteriaError::Malformed(e.to_string()))?;
        Self::from_pairs(&pairs)
    }

    /// Builds the query from already decoded `(key, value)` pairs.
    ///
    /// Parameters without a `<field>.<operator>` shape other than `page`,
    /// `size` and `sort` are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, CriteriaError> {
        let mut criteria = MenuCriteria::default();
        let mut page = 0;
        let mut size = DEFAULT_PAGE_SIZE;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => page = parse_value(key, value)?,
                "size" => size = parse_value(key, value)?,
                "sort" => sort.extend(parse_sort(value)?),
                _ => {
                    if let Some((field, operator)) = key.split_once('.') {
                        apply_parameter(&mut criteria, field, operator, key, value)?;
                    }
                }
            }
        }

        let mut page = PageRequest::new(page, size);
        page.sort = sort;

        Ok(Self { criteria, page })
    }
}

fn parse_value<T: FromStr>(parameter: &str, value: &str) -> Result<T, CriteriaError> {
    value.trim().parse().map_err(|_| CriteriaError::InvalidValue {
        parameter: parameter.to_string(),
        value: value.to_string(),
    })
}

fn parse_list<T: FromStr>(parameter: &str, value: &str) -> Result<Vec<T>, CriteriaError> {
    value
        .split(',')
        .map(|item| parse_value(parameter, item))
        .collect()
}

fn parse_sort(value: &str) -> Result<Vec<Sort>, CriteriaError> {
    let mut parts: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let direction = match parts.last().and_then(|last| SortDirection::from_keyword(last)) {
        Some(direction) => {
            parts.pop();
            direction
        }
        None => SortDirection::Asc,
    };

    parts
        .into_iter()
        .map(|property| {
            MenuSortField::from_property(property)
                .map(|field| Sort { field, direction })
                .ok_or_else(|| CriteriaError::UnknownSortProperty(property.to_string()))
        })
        .collect()
}

/// Applies one of the operators every filter type understands.
///
/// Returns `Ok(false)` when `operator` is not one of them.
fn apply_common<T: FromStr>(
    filter: &mut Filter<T>,
    operator: &str,
    parameter: &str,
    value: &str,
) -> Result<bool, CriteriaError> {
    match operator {
        "equals" => filter.equals = Some(parse_value(parameter, value)?),
        "notEquals" => filter.not_equals = Some(parse_value(parameter, value)?),
        "specified" => filter.specified = Some(parse_value(parameter, value)?),
        "in" => filter.in_list = Some(parse_list(parameter, value)?),
        "notIn" => filter.not_in = Some(parse_list(parameter, value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn apply_range<T: FromStr>(
    filter: &mut RangeFilter<T>,
    operator: &str,
    parameter: &str,
    value: &str,
) -> Result<bool, CriteriaError> {
    match operator {
        "greaterThan" => filter.greater_than = Some(parse_value(parameter, value)?),
        "greaterThanOrEqual" => {
            filter.greater_than_or_equal = Some(parse_value(parameter, value)?)
        }
        "lessThan" => filter.less_than = Some(parse_value(parameter, value)?),
        "lessThanOrEqual" => filter.less_than_or_equal = Some(parse_value(parameter, value)?),
        _ => return apply_common(&mut filter.base, operator, parameter, value),
    }
    Ok(true)
}

/// Text operands are taken verbatim; only `specified` is parsed.
fn apply_string(
    filter: &mut StringFilter,
    operator: &str,
    parameter: &str,
    value: &str,
) -> Result<bool, CriteriaError> {
    let verbatim_list = || -> Vec<String> { value.split(',').map(str::to_string).collect() };
    match operator {
        "equals" => filter.base.equals = Some(value.to_string()),
        "notEquals" => filter.base.not_equals = Some(value.to_string()),
        "in" => filter.base.in_list = Some(verbatim_list()),
        "notIn" => filter.base.not_in = Some(verbatim_list()),
        "contains" => filter.contains = Some(value.to_string()),
        "doesNotContain" => filter.does_not_contain = Some(value.to_string()),
        _ => return apply_common(&mut filter.base, operator, parameter, value),
    }
    Ok(true)
}

fn apply_parameter(
    criteria: &mut MenuCriteria,
    field: &str,
    operator: &str,
    parameter: &str,
    value: &str,
) -> Result<(), CriteriaError> {
    let known = match field {
        "id" => apply_range(
            criteria.id.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        "label" => apply_string(
            criteria.label.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        "name" => apply_string(
            criteria.name.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        "position" => apply_range(
            criteria.position.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        "level" => apply_range(
            criteria.level.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        "active" => apply_common(
            criteria.active.get_or_insert_with(Default::default),
            operator,
            parameter,
            value,
        )?,
        _ => return Err(CriteriaError::UnknownField(field.to_string())),
    };

    if known {
        Ok(())
    } else {
        Err(CriteriaError::UnknownOperator {
            field: field.to_string(),
            operator: operator.to_string(),
        })
    }
}

//! Individual validation rule implementations.
//!
//! Each rule inspects one field of a JSON payload and returns the typed
//! value when the field is present and valid, `None` when it is absent, or
//! the [`ValidationError`] for the first violated constraint. A JSON `null`
//! counts as absent. Unknown keys are never inspected.

use super::{TitleRequirement, ValidationError, ValidationLimits};
use crate::board::domain::{Column, Link, Position, TaskDomainError};
use serde_json::{Map, Value};

/// JSON object holding a candidate task.
pub type Payload = Map<String, Value>;

/// Validates the title.
///
/// # Errors
///
/// Returns [`ValidationError::MissingTitle`] when a required title is
/// absent, or a type, emptiness, or length error.
pub fn validate_title(
    payload: &Payload,
    requirement: TitleRequirement,
    limits: &ValidationLimits,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = present(payload, "title") else {
        return match requirement {
            TitleRequirement::Required => Err(ValidationError::MissingTitle),
            TitleRequirement::Optional => Ok(None),
        };
    };
    let title = expect_str(value, "title")?;
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    check_length("title", title, limits.max_title_length)?;
    Ok(Some(title.to_owned()))
}

/// Validates the description.
///
/// # Errors
///
/// Returns a type or length error.
pub fn validate_description(
    payload: &Payload,
    limits: &ValidationLimits,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = present(payload, "description") else {
        return Ok(None);
    };
    let description = expect_str(value, "description")?;
    check_length("description", description, limits.max_description_length)?;
    Ok(Some(description.to_owned()))
}

/// Validates the tag list: its type, its size, then each element.
///
/// # Errors
///
/// Returns a type, count, or per-tag length error.
pub fn validate_tags(
    payload: &Payload,
    limits: &ValidationLimits,
) -> Result<Option<Vec<String>>, ValidationError> {
    let Some(value) = present(payload, "tags") else {
        return Ok(None);
    };
    let items = expect_array(value, "tags")?;
    check_count("tags", items.len(), limits.max_tags)?;

    let mut tags = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("tags[{index}]");
        let tag = item
            .as_str()
            .ok_or_else(|| ValidationError::invalid_type(field.clone(), "a string"))?;
        check_length(field, tag, limits.max_tag_length)?;
        tags.push(tag.to_owned());
    }
    Ok(Some(tags))
}

/// Validates the column name against the board columns.
///
/// # Errors
///
/// Returns a type error or [`ValidationError::InvalidColumn`].
pub fn validate_column(payload: &Payload) -> Result<Option<Column>, ValidationError> {
    let Some(value) = present(payload, "column") else {
        return Ok(None);
    };
    let name = expect_str(value, "column")?;
    Column::try_from(name)
        .map(Some)
        .map_err(|err| ValidationError::InvalidColumn(err.0))
}

/// Validates the position.
///
/// # Errors
///
/// Returns a type error, [`ValidationError::NegativePosition`], or
/// [`ValidationError::PositionOutOfRange`].
pub fn validate_position(payload: &Payload) -> Result<Option<Position>, ValidationError> {
    let Some(value) = present(payload, "position") else {
        return Ok(None);
    };
    let Some(raw) = value.as_i64() else {
        if value.is_u64() {
            return Err(ValidationError::PositionOutOfRange);
        }
        return Err(ValidationError::invalid_type("position", "an integer"));
    };
    Position::new(raw).map(Some).map_err(|err| match err {
        TaskDomainError::NegativePosition(value) => ValidationError::NegativePosition(value),
        TaskDomainError::PositionOutOfRange(_) | TaskDomainError::PositionExhausted(_) => {
            ValidationError::PositionOutOfRange
        }
    })
}

/// Validates the link list: its type, its size, then each link in order.
///
/// # Errors
///
/// Returns a type or count error for the list, or
/// [`ValidationError::InvalidLink`] for the first malformed link.
pub fn validate_links(
    payload: &Payload,
    limits: &ValidationLimits,
) -> Result<Option<Vec<Link>>, ValidationError> {
    let Some(value) = present(payload, "links") else {
        return Ok(None);
    };
    let items = expect_array(value, "links")?;
    check_count("links", items.len(), limits.max_links)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_link(item, index, limits))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn validate_link(
    item: &Value,
    index: usize,
    limits: &ValidationLimits,
) -> Result<Link, ValidationError> {
    let object = item
        .as_object()
        .ok_or_else(|| ValidationError::invalid_link(index, "must be an object"))?;

    let url = present(object, "url")
        .ok_or_else(|| ValidationError::invalid_link(index, "url is required"))?
        .as_str()
        .ok_or_else(|| ValidationError::invalid_link(index, "url must be a string"))?;
    if url.chars().count() > limits.max_link_url_length {
        return Err(ValidationError::invalid_link(
            index,
            format!(
                "url must be at most {} characters",
                limits.max_link_url_length
            ),
        ));
    }

    let kind = present(object, "type")
        .map(|value| {
            value
                .as_str()
                .ok_or_else(|| ValidationError::invalid_link(index, "type must be a string"))
        })
        .transpose()?;

    let title = present(object, "title")
        .map(|value| {
            value
                .as_str()
                .ok_or_else(|| ValidationError::invalid_link(index, "title must be a string"))
        })
        .transpose()?;
    if let Some(text) = title
        && text.chars().count() > limits.max_link_title_length
    {
        return Err(ValidationError::invalid_link(
            index,
            format!(
                "title must be at most {} characters",
                limits.max_link_title_length
            ),
        ));
    }

    Ok(Link {
        url: url.to_owned(),
        kind: kind.map(str::to_owned),
        title: title.map(str::to_owned),
    })
}

fn present<'a>(payload: &'a Payload, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

fn expect_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::invalid_type(field, "a string"))
}

fn expect_array<'a>(value: &'a Value, field: &'static str) -> Result<&'a [Value], ValidationError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::invalid_type(field, "an array"))
}

fn check_length(field: impl Into<String>, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::too_long(field, max));
    }
    Ok(())
}

const fn check_count(field: &'static str, actual: usize, max: usize) -> Result<(), ValidationError> {
    if actual > max {
        return Err(ValidationError::TooMany { field, max, actual });
    }
    Ok(())
}

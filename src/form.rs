//! Trip request form
//!
//! Holds the draft the user edits and decides when it may be submitted.

use crate::api::ItineraryApi;
use crate::models::trip::{DEFAULT_BUDGET, MAX_DAYS, MIN_BUDGET, MIN_DAYS};
use crate::models::{TripField, TripRequest};
use crate::view_model::ItineraryViewModel;
use crate::{Result, TrippinError};
use std::num::IntErrorKind;
use tracing::debug;

/// Form inputs that accept raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Location,
    Days,
    Budget,
}

#[derive(Debug, Clone, Default)]
pub struct RequestFormController {
    draft: TripRequest,
}

impl RequestFormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_draft(draft: TripRequest) -> Self {
        Self { draft }
    }

    #[must_use]
    pub fn draft(&self) -> &TripRequest {
        &self.draft
    }

    /// Replace one field of the draft. No cross-field validation happens here.
    pub fn update_field(&mut self, field: TripField) {
        debug!("Draft edit: {:?}", field);
        self.draft.set(field);
    }

    /// Read raw input text into a field the way the form inputs do.
    ///
    /// Days fall back to 1 and are clamped to 1..=30. Budget falls back to 100
    /// when unreadable or zero and never goes below 1.
    pub fn apply_input(&mut self, input: FormInput, raw: &str) {
        let field = match input {
            FormInput::Location => TripField::Location(raw.to_string()),
            FormInput::Days => TripField::Days(parse_days(raw)),
            FormInput::Budget => TripField::Budget(parse_budget(raw)),
        };
        self.update_field(field);
    }

    /// True iff the destination is non-empty after trimming
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft.has_destination()
    }

    /// Hand a snapshot of the draft to the view model.
    ///
    /// Returns `Ok(false)` without side effects while a request is in flight,
    /// and a validation error when the destination is blank.
    pub async fn submit<A: ItineraryApi>(&self, view_model: &mut ItineraryViewModel<A>) -> Result<bool> {
        if !self.can_submit() {
            return Err(TrippinError::validation("Please enter a destination"));
        }
        if view_model.is_loading() {
            debug!("Submit ignored: a request is already in flight");
            return Ok(false);
        }

        view_model.submit(self.draft.clone()).await;
        Ok(true)
    }
}

fn parse_days(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    match trimmed[..digits_end].parse::<i64>() {
        Ok(days) => days.clamp(i64::from(MIN_DAYS), i64::from(MAX_DAYS)) as u32,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_DAYS,
        Err(_) => MIN_DAYS,
    }
}

fn parse_budget(raw: &str) -> f64 {
    match decimal_prefix(raw.trim()).parse::<f64>() {
        Ok(budget) if budget.is_finite() && budget != 0.0 => budget.max(MIN_BUDGET),
        _ => DEFAULT_BUDGET,
    }
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` run, empty when there are no mantissa digits
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut mantissa_digits = digits_from(end);
    end += mantissa_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        mantissa_digits += fraction;
        end += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    &s[..end]
}

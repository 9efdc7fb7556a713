//! Step list, current-step pointer and per-step status derivation

use std::fmt::Display;

use super::StepperError;

/// Position of a step relative to the current-step pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Before the current step
    Completed,
    /// The current step
    Active,
    /// After the current step
    Upcoming,
}

impl StepStatus {
    /// Derive the status of step `index` for the pointer `current`
    pub fn of(index: usize, current: usize) -> Self {
        if index < current {
            StepStatus::Completed
        } else if index == current {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }

    /// Completed or active
    pub fn is_reached(self) -> bool {
        !matches!(self, StepStatus::Upcoming)
    }
}

/// Fill fraction of the connector between step `index` and `index + 1`
pub fn connector_fill(index: usize, current: usize) -> f32 {
    if StepStatus::of(index, current).is_reached() {
        1.0
    } else {
        0.0
    }
}

/// A single step: marker shown in the indicator, title and optional description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub marker: String,
    pub title: String,
    pub description: String,
}

/// Ordered step list. Steps have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Steps {
    steps: Vec<Step>,
}

impl Steps {
    /// Steps numbered `1..=n` in order
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Step {
                marker: (i + 1).to_string(),
                title: title.into(),
                description: String::new(),
            })
            .collect();
        Self { steps }
    }

    /// Steps from parallel marker and title lists
    pub fn with_markers<M, T>(
        markers: impl IntoIterator<Item = M>,
        titles: impl IntoIterator<Item = T>,
    ) -> Result<Self, StepperError>
    where
        M: Display,
        T: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(|m| m.to_string()).collect();
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if markers.len() != titles.len() {
            return Err(StepperError::LengthMismatch {
                what: "titles",
                expected: markers.len(),
                found: titles.len(),
            });
        }

        let steps = markers
            .into_iter()
            .zip(titles)
            .map(|(marker, title)| Step {
                marker,
                title,
                description: String::new(),
            })
            .collect();
        Ok(Self { steps })
    }

    /// Attach a description to every step
    pub fn with_descriptions<D>(
        mut self,
        descriptions: impl IntoIterator<Item = D>,
    ) -> Result<Self, StepperError>
    where
        D: Into<String>,
    {
        let descriptions: Vec<String> = descriptions.into_iter().map(Into::into).collect();
        if descriptions.len() != self.steps.len() {
            return Err(StepperError::LengthMismatch {
                what: "descriptions",
                expected: self.steps.len(),
                found: descriptions.len(),
            });
        }

        for (step, description) in self.steps.iter_mut().zip(descriptions) {
            step.description = description;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Validated current-step pointer into a list of `total` steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepProgress {
    total: usize,
    current: usize,
}

impl StepProgress {
    /// Reject a pointer outside `[0, total)`.
    /// An empty list only accepts `current == 0`.
    pub fn new(total: usize, current: usize) -> Result<Self, StepperError> {
        let in_range = if total == 0 {
            current == 0
        } else {
            current < total
        };
        if !in_range {
            return Err(StepperError::IndexOutOfRange {
                index: current,
                len: total,
            });
        }
        Ok(Self { total, current })
    }

    /// Clamp the pointer into range instead of rejecting it
    pub fn clamped(total: usize, current: usize) -> Self {
        Self {
            total,
            current: current.min(total.saturating_sub(1)),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_last(&self) -> bool {
        self.total > 0 && self.current + 1 == self.total
    }

    pub fn status(&self, index: usize) -> StepStatus {
        StepStatus::of(index, self.current)
    }

    pub fn connector_fill(&self, index: usize) -> f32 {
        connector_fill(index, self.current)
    }

    pub fn statuses(&self) -> impl Iterator<Item = StepStatus> + '_ {
        (0..self.total).map(|i| self.status(i))
    }

    /// Next step, wrapping to the first after the last
    pub fn advance_wrapping(self) -> Self {
        if self.total == 0 {
            return self;
        }
        Self {
            current: (self.current + 1) % self.total,
            ..self
        }
    }

    /// Previous step, wrapping to the last before the first
    pub fn retreat_wrapping(self) -> Self {
        if self.total == 0 {
            return self;
        }
        Self {
            current: (self.current + self.total - 1) % self.total,
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self { current: 0, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_partition() {
        let progress = StepProgress::new(5, 2).unwrap();
        let statuses: Vec<_> = progress.statuses().collect();

        for (i, status) in statuses.iter().enumerate() {
            match i.cmp(&2) {
                std::cmp::Ordering::Less => assert_eq!(*status, StepStatus::Completed),
                std::cmp::Ordering::Equal => assert_eq!(*status, StepStatus::Active),
                std::cmp::Ordering::Greater => assert_eq!(*status, StepStatus::Upcoming),
            }
        }
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == StepStatus::Active)
                .count(),
            1
        );
    }

    #[test]
    fn test_exactly_one_active_for_every_pointer() {
        for total in 1..6 {
            for current in 0..total {
                let progress = StepProgress::new(total, current).unwrap();
                let active = progress
                    .statuses()
                    .filter(|s| *s == StepStatus::Active)
                    .count();
                assert_eq!(active, 1, "total={} current={}", total, current);
            }
        }
    }

    #[test]
    fn test_connector_fill_rule() {
        let current = 2;
        assert_eq!(connector_fill(0, current), 1.0);
        assert_eq!(connector_fill(1, current), 1.0);
        // Connector leaving the active step is filled too
        assert_eq!(connector_fill(2, current), 1.0);
        assert_eq!(connector_fill(3, current), 0.0);
        assert_eq!(connector_fill(4, current), 0.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            StepProgress::new(3, 3),
            Err(StepperError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(StepProgress::new(0, 1).is_err());
        assert!(StepProgress::new(0, 0).is_ok());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(StepProgress::clamped(3, 10).current(), 2);
        assert_eq!(StepProgress::clamped(3, 1).current(), 1);
        assert_eq!(StepProgress::clamped(0, 4).current(), 0);
    }

    #[test]
    fn test_wrapping_navigation() {
        let progress = StepProgress::new(3, 2).unwrap();
        assert_eq!(progress.advance_wrapping().current(), 0);
        assert_eq!(progress.retreat_wrapping().current(), 1);
        assert_eq!(progress.reset().current(), 0);
        assert!(progress.is_last());

        let first = StepProgress::new(3, 0).unwrap();
        assert_eq!(first.retreat_wrapping().current(), 2);

        let empty = StepProgress::default();
        assert_eq!(empty.advance_wrapping(), empty);
    }

    #[test]
    fn test_steps_from_titles_numbers_markers() {
        let steps = Steps::from_titles(["Pending", "In Progress", "Successful"]);
        let markers: Vec<_> = steps.iter().map(|s| s.marker.as_str()).collect();
        assert_eq!(markers, ["1", "2", "3"]);
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_parallel_lists_must_match() {
        let err = Steps::with_markers([1, 2, 3], ["A", "B"]).unwrap_err();
        assert_eq!(
            err,
            StepperError::LengthMismatch {
                what: "titles",
                expected: 3,
                found: 2
            }
        );

        let steps = Steps::with_markers([1, 2], ["A", "B"]).unwrap();
        assert!(steps.clone().with_descriptions(["only one"]).is_err());

        let described = steps.with_descriptions(["first", "second"]).unwrap();
        assert_eq!(described.get(1).unwrap().description, "second");
    }

    #[test]
    fn test_empty_steps_valid() {
        let steps = Steps::from_titles(Vec::<String>::new());
        assert!(steps.is_empty());
        assert!(steps.with_descriptions(Vec::<String>::new()).is_ok());
    }
}

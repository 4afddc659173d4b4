// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The trace module records the named intermediate values of a geodesic
//! calculation, in computation order, for audit and display.

use core::fmt;
use core::slice;

/// A single named intermediate value of a calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStep {
    name: &'static str,
    value: f64,
}

impl TraceStep {
    /// The name of the intermediate value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The intermediate value.
    ///
    /// Angles carry the unit of the corresponding solver step: latitudes,
    /// azimuths and longitude differences are in degrees, auxiliary-sphere
    /// angular distances in radians, and the remaining steps are ratios.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// The ordered sequence of named intermediate values of a calculation.
///
/// A `Trace` is append-only while the solver runs and immutable afterwards.
/// It is only ever rendered, never re-parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Construct an empty `Trace`.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a named value, preserving computation order.
    pub(crate) fn push(&mut self, name: &'static str, value: f64) {
        self.steps.push(TraceStep { name, value });
    }

    /// The number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in computation order.
    pub fn iter(&self) -> slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// The value of the first step with the given name, if recorded.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(TraceStep::value)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trace {
    /// Render one `name = value` line per step, in computation order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{} = {:.12}", step.name, step.value)?;
        }
        Ok(())
    }
}

// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Source location tracking for the tokenizer

use std::fmt;

/// A position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker {
    /// Character index into the input (0-indexed, counts Unicode scalar values)
    pub index: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Marker {
    /// Position of the first character of any input
    pub const START: Marker = Marker {
        index: 0,
        line: 1,
        column: 0,
    };

    /// Create a new marker
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Scan position: the public marker plus the byte offset used for slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Cursor {
    pub marker: Marker,
    pub offset: usize,
}

impl Cursor {
    /// Step over `c`, which must be the character at the current offset
    #[inline(always)]
    pub fn step(&mut self, c: char) {
        self.offset += c.len_utf8();
        self.marker.index += 1;
        if c == '\n' {
            self.marker.line += 1;
            self.marker.column = 0;
        } else {
            self.marker.column += 1;
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading numbers out of command-line text.

use std::any::type_name;
use std::str::FromStr;

use errors::{FractalError, Result};

/// Parse `s` as a `T`, surrounding whitespace allowed.  Unlike reading
/// from a stream, a malformed value is an error rather than a silent
/// default.
pub fn parse_number<T: FromStr>(s: &str) -> Result<T> {
    T::from_str(s.trim()).map_err(|_| FractalError::Parse {
        value: s.to_string(),
        kind: type_name::<T>(),
    })
}

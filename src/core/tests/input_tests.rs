// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

use crate::core::input::{float_or, int_or, parse_float, parse_int, InputError};

#[test]
fn test_parse_int_valid() {
    assert_eq!(parse_int("42"), Ok(42));
    assert_eq!(parse_int("  -7 "), Ok(-7));
}

#[test]
fn test_parse_int_empty() {
    assert_eq!(parse_int(""), Err(InputError::Empty));
    assert_eq!(parse_int("   "), Err(InputError::Empty));
}

#[test]
fn test_parse_int_not_numeric() {
    assert_eq!(
        parse_int("abc"),
        Err(InputError::NotNumeric("abc".to_string()))
    );
    assert_eq!(
        parse_int("4.5"),
        Err(InputError::NotNumeric("4.5".to_string()))
    );
}

#[test]
fn test_parse_float_valid() {
    assert_eq!(parse_float("8.5"), Ok(8.5));
    assert_eq!(parse_float(" 8 "), Ok(8.0));
}

#[test]
fn test_parse_float_invalid() {
    assert_eq!(parse_float(""), Err(InputError::Empty));
    assert_eq!(
        parse_float("eight"),
        Err(InputError::NotNumeric("eight".to_string()))
    );
}

#[test]
fn test_defaulting_wrappers() {
    // The GUI contract: blank or malformed silently becomes the default
    assert_eq!(int_or("", 5), 5);
    assert_eq!(int_or("oops", 0), 0);
    assert_eq!(int_or("12", 5), 12);

    assert_eq!(float_or("", 0.0), 0.0);
    assert_eq!(float_or("x", 0.0), 0.0);
    assert_eq!(float_or("8.5", 0.0), 8.5);
}

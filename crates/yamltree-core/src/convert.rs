// Dweve Yamltree - Immutable YAML Document Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions from host values to scalars.
//!
//! Any value with a [`Display`] form can become a scalar; an absent value
//! becomes the null scalar. Primitive types also convert directly through
//! `From`, so builders accept them as keys and values.

use std::fmt::Display;

use crate::node::{Node, Scalar};

/// The scalar form of an optional value: its `Display` text, or `null` when
/// absent. The result carries no comment.
///
/// # Examples
///
/// ```
/// use yamltree_core::convert::scalar_of;
///
/// assert_eq!(scalar_of(Some(&42)).value(), "42");
/// assert!(scalar_of::<i32>(None).is_null());
/// ```
pub fn scalar_of<T: Display + ?Sized>(value: Option<&T>) -> Scalar {
    match value {
        Some(value) => Scalar::new(value.to_string()),
        None => Scalar::null(),
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::new(value.to_string())
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> From<Option<T>> for Node
where
    Node: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Node::from(value),
            None => Node::Scalar(Scalar::null()),
        }
    }
}

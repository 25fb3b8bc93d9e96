// Copyright 2025 OPPO.
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

//! Addon resource types shared by reconcilers.
//!
//! [`DeclarativeObject`] is implemented by every object a reconciler may be
//! driving. Objects that can surface health to users additionally implement
//! [`CommonObject`] and expose it through
//! [`DeclarativeObject::as_common_object`].

mod addon;
mod common;

pub use addon::{Addon, ADDON_API_VERSION, ADDON_KIND};
pub use common::{CommonObject, CommonSpec, CommonStatus, DeclarativeObject};

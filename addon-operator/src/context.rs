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

use tokio_util::sync::CancellationToken;

/// Per reconcile pass context handed to every hook.
#[derive(Debug, Clone, Default)]
pub struct ReconcileContext {
    request: String,
    cancel: CancellationToken,
}

impl ReconcileContext {
    pub fn new(request: impl Into<String>) -> Self {
        Self::with_token(request, CancellationToken::new())
    }

    pub fn with_token(request: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            request: request.into(),
            cancel,
        }
    }

    /// `namespace/name` of the object being reconciled.
    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

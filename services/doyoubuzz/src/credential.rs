// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use showcase_core::{utils::Redact, SigningCredential};

/// Credential for the Showcase API.
#[derive(Clone)]
pub struct Credential {
    /// Public api key, sent as the `apikey` query parameter.
    pub api_key: String,
    /// Shared secret used to compute the request hash. Never sent.
    pub api_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_validity() {
        assert!(Credential::new("an_api_key", "an_api_secret").is_valid());
        assert!(!Credential::new("", "an_api_secret").is_valid());
        assert!(!Credential::new("an_api_key", "").is_valid());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new("an_api_key", "a_very_long_api_secret");
        let output = format!("{cred:?}");

        assert!(!output.contains("a_very_long_api_secret"));
        assert!(output.contains("a_v***ret"));
    }
}

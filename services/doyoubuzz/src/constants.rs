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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the showcase client.
pub const SHOWCASE_API_KEY: &str = "SHOWCASE_API_KEY";
pub const SHOWCASE_API_SECRET: &str = "SHOWCASE_API_SECRET";
pub const SHOWCASE_ENDPOINT: &str = "SHOWCASE_ENDPOINT";
pub const SHOWCASE_SSO_BASE_URL: &str = "SHOWCASE_SSO_BASE_URL";

// Defaults of the hosted service.
pub const DEFAULT_ENDPOINT: &str = "http://showcase.doyoubuzz.com/api/v1";
pub const DEFAULT_SSO_BASE_URL: &str = "http://showcase.doyoubuzz.com";
pub const DEFAULT_SSO_LOCALE: &str = "fr";

// Authentication query parameters.
pub const APIKEY: &str = "apikey";
pub const TIMESTAMP: &str = "timestamp";
pub const HASH: &str = "hash";

/// Attributes every SSO redirect must carry, in signing order.
pub const SSO_MANDATORY_ATTRIBUTES: [&str; 4] = ["email", "firstname", "lastname", "external_id"];

/// AsciiSet for a single URL path segment.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

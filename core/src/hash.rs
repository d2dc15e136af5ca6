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

//! Hash related utils.

use md5::Digest;
use md5::Md5;

/// Hex encoded MD5 hash.
///
/// Use this function instead of `hex::encode(md5(content))` can reduce
/// extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Sign values with a shared secret.
///
/// The values are concatenated in the given order without separator, the
/// secret is appended, and the result is hashed with MD5:
///
/// ```text
/// hex(md5(value_1 + value_2 + ... + value_n + secret))
/// ```
///
/// Callers own the ordering: the API signer passes values sorted by their
/// parameter name while SSO uses a fixed field order.
pub fn hex_md5_signature<'a>(secret: &str, values: impl IntoIterator<Item = &'a str>) -> String {
    let mut h = Md5::new();
    for v in values {
        h.update(v.as_bytes());
    }
    h.update(secret.as_bytes());

    hex::encode(h.finalize())
}

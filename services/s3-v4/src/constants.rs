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

// Headers used in s3 requests.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Signing algorithm and service scope.
pub const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";
pub const S3_SERVICE: &str = "s3";

// Env values used to configure storage access.
pub const PROVSIGN_S3_PROVIDER: &str = "PROVSIGN_S3_PROVIDER";
pub const PROVSIGN_S3_REGION: &str = "PROVSIGN_S3_REGION";
pub const PROVSIGN_S3_BUCKET: &str = "PROVSIGN_S3_BUCKET";
pub const PROVSIGN_S3_ALLOWED_ORIGIN: &str = "PROVSIGN_S3_ALLOWED_ORIGIN";
pub const PROVSIGN_S3_SIGNING_REGION: &str = "PROVSIGN_S3_SIGNING_REGION";
pub const PROVSIGN_S3_TIMEOUT_SECS: &str = "PROVSIGN_S3_TIMEOUT_SECS";
pub const PROVSIGN_S3_ACCESS_KEY_ID: &str = "PROVSIGN_S3_ACCESS_KEY_ID";
pub const PROVSIGN_S3_SECRET_ACCESS_KEY: &str = "PROVSIGN_S3_SECRET_ACCESS_KEY";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

// Provider error codes inspected on bucket creation.
pub const BUCKET_ALREADY_OWNED_BY_YOU: &str = "BucketAlreadyOwnedByYou";
pub const BUCKET_ALREADY_EXISTS: &str = "BucketAlreadyExists";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

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

//! Tokio-based file writing implementation for provsign.
//!
//! This crate provides `TokioFileWrite`, an async file writer that implements
//! the `FileWrite` trait from `provsign_core` using Tokio's file system operations.
//!
//! Files are created with mode `0600` on unix, they usually hold private keys.
//!
//! ## Example
//!
//! ```no_run
//! use provsign_core::Context;
//! use provsign_file_write_tokio::TokioFileWrite;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_file_write(TokioFileWrite);
//!
//!     match ctx.file_write("/path/to/id_rsa.pem", b"...").await {
//!         Ok(()) => println!("key written"),
//!         Err(e) => eprintln!("Failed to write file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use provsign_core::{Error, FileWrite, Result};
use tokio::io::AsyncWriteExt;

/// Tokio-based implementation of the `FileWrite` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileWrite;

#[async_trait]
impl FileWrite for TokioFileWrite {
    async fn file_write(&self, path: &str, content: &[u8]) -> Result<()> {
        let mut opts = tokio::fs::OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        opts.mode(0o600);

        let mut f = opts.open(path).await.map_err(|e| {
            Error::unexpected("failed to open file")
                .with_source(e)
                .with_context(format!("path: {path}"))
        })?;
        f.write_all(content).await.map_err(|e| {
            Error::unexpected("failed to write file")
                .with_source(e)
                .with_context(format!("path: {path}"))
        })?;
        f.flush().await.map_err(|e| {
            Error::unexpected("failed to flush file")
                .with_source(e)
                .with_context(format!("path: {path}"))
        })?;
        Ok(())
    }
}

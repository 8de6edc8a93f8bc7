//! Test data factories
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use gradle_update_pr::config::{UpdateOptions, UpdateRequest};
use gradle_update_pr::error::{Error, Result};
use gradle_update_pr::types::FileMode;
use gradle_update_pr::worktree::WorkingTree;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Base commit used by requests built here
pub const BASE_SHA: &str = "base000000000000000000000000000000000000";

/// In-memory working tree
pub struct StubWorkingTree {
    files: HashMap<String, (Vec<u8>, FileMode)>,
    reads: Mutex<Vec<String>>,
}

impl StubWorkingTree {
    /// Empty tree
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Add a file
    pub fn with_file(mut self, path: &str, content: &[u8], mode: FileMode) -> Self {
        self.files
            .insert(path.to_string(), (content.to_vec(), mode));
        self
    }

    /// Paths read so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    fn lookup(&self, path: &str) -> Result<&(Vec<u8>, FileMode)> {
        self.files.get(path).ok_or_else(|| {
            Error::Io(io::Error::new(io::ErrorKind::NotFound, path.to_string()))
        })
    }
}

#[async_trait]
impl WorkingTree for StubWorkingTree {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.reads.lock().unwrap().push(path.to_string());
        Ok(self.lookup(path)?.0.clone())
    }

    async fn file_mode(&self, path: &str) -> Result<FileMode> {
        Ok(self.lookup(path)?.1)
    }
}

/// The four files a wrapper update touches
pub fn wrapper_paths() -> Vec<String> {
    vec![
        "gradle/wrapper/gradle-wrapper.jar".to_string(),
        "gradle/wrapper/gradle-wrapper.properties".to_string(),
        "gradlew".to_string(),
        "gradlew.bat".to_string(),
    ]
}

/// Working tree holding [`wrapper_paths`]
pub fn wrapper_tree() -> StubWorkingTree {
    StubWorkingTree::new()
        .with_file(
            "gradle/wrapper/gradle-wrapper.jar",
            &[0x50, 0x4b, 0x03, 0x04],
            FileMode::Regular,
        )
        .with_file(
            "gradle/wrapper/gradle-wrapper.properties",
            b"distributionUrl=https\\://services.gradle.org/distributions/gradle-7.0-bin.zip\n",
            FileMode::Regular,
        )
        .with_file("gradlew", b"#!/bin/sh\n", FileMode::Executable)
        .with_file("gradlew.bat", b"@echo off\r\n", FileMode::Regular)
}

/// Request for a 6.8 -> 7.0 update of [`wrapper_paths`]
pub fn make_request(source: Option<&str>) -> UpdateRequest {
    UpdateRequest::new(wrapper_paths(), "7.0", source, BASE_SHA).unwrap()
}

/// Options with optional target branch and reviewers
pub fn make_options(target_branch: Option<&str>, reviewers: &[&str]) -> UpdateOptions {
    UpdateOptions {
        target_branch: target_branch.map(String::from),
        reviewers: reviewers.iter().map(ToString::to_string).collect(),
    }
}

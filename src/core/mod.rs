//! Core document operations: titles, words, collections, trees and configuration

pub mod aggregator;
pub mod config;
pub mod dates;
pub mod document;
pub mod file_system;
pub mod recursion;
pub mod title;
pub mod words;

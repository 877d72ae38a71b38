// Business logic services module
// This module contains the storage layer behind the handlers

pub mod in_memory_storage;
pub mod registry;
pub mod storage;

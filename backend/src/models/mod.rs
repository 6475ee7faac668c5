//! Domain models for the patient simulator

pub mod action;
pub mod event;
pub mod labs;
pub mod physiology;
pub mod vitals;

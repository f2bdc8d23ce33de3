//! # Order API
//!
//! > **An in-memory order service built on a resource actor.**
//!
//! Orders (delivery details, a status, and a list of dishes) are created,
//! listed, read, updated and deleted over HTTP. All state lives in a single
//! actor task that owns the store and serves requests one at a time, so the
//! read-check-write rules (delivered orders are frozen, only pending orders
//! can be deleted) hold without locks.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and its
//! [`ResourceClient`](framework::ResourceClient). Entities plug in through
//! [`ActorEntity`](framework::ActorEntity).
//!
//! ### 2. The Domain ([`model`], [`order_actor`])
//! The order record, its payloads, the validation pipeline and
//! [`OrderError`](order_actor::OrderError).
//!
//! ### 3. The Interface ([`clients`], [`http`])
//! [`OrderClient`](clients::OrderClient) hides message passing; the axum
//! router maps verbs onto it and errors onto JSON responses.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`], [`seed`])
//! Startup, seeding, logging and graceful shutdown.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --addr 127.0.0.1:5000 --seed data/seed.json
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! See [`framework::mock`] for a client that answers from canned expectations.

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod seed;

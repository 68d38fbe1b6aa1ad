//! Unit tests for the agent discovery context.

//! Empty library stub; the end-to-end tests live in `tests/`.

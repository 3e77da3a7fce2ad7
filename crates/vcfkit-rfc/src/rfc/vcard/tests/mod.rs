//! vCard fixtures with parse, round-trip, and property-based tests.

//! Tests for the similarity measures and the image dispatcher.

// SPDX-License-Identifier: MPL-2.0
//! Shared visual vocabulary for the snackbar widget.

pub mod design_tokens;

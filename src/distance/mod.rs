// SPDX-License-Identifier: MIT
// Distance submodule structure
pub mod metrics;

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` bundles embedded at compile time from
//! `assets/i18n/`. The locale is picked from the `--lang` flag, then the
//! config file, then the OS locale, then `en-US`.

pub mod fluent;

// ABOUTME: Push-notification delivery seam implemented by collaborators
// ABOUTME: PushNotification payload model and the NotificationChannel trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// Payload handed to the delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Structured data attached for the receiving client
    pub data: HashMap<String, String>,
}

/// Delivery channel for push notifications.
///
/// Implemented by the surrounding application (FCM, APNs, a test double);
/// the engine only decides *whether* and *what* to send. Delivery failures
/// stay inside the channel's error and must never block the pure
/// computation paths.
pub trait NotificationChannel {
    /// Deliver a notification to the device identified by `token`.
    ///
    /// # Errors
    /// Returns the channel's delivery failure; callers log and continue.
    fn send(&self, token: &str, notification: &PushNotification) -> AppResult<()>;
}

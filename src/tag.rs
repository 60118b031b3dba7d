/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! FIX tag number constants and `tag=value` field helpers.
//!
//! Only the tags the log scanner touches (or that appear in typical session
//! log lines used as fixtures) are listed. Tags are `u32`, as in the rest of
//! ALICE-FIX.

// ---------------------------------------------------------------------------
// Standard header tags
// ---------------------------------------------------------------------------

/// Tag 8 (BeginString): identifies the FIX version (e.g., "FIX.4.4").
pub const BEGIN_STRING: u32 = 8;

/// Tag 9 (BodyLength).
pub const BODY_LENGTH: u32 = 9;

/// Tag 35 (MsgType): identifies the message type (e.g., "8" = ExecutionReport).
pub const MSG_TYPE: u32 = 35;

/// Tag 49 (SenderCompID).
pub const SENDER_COMP_ID: u32 = 49;

/// Tag 56 (TargetCompID).
pub const TARGET_COMP_ID: u32 = 56;

/// Tag 34 (MsgSeqNum).
pub const MSG_SEQ_NUM: u32 = 34;

/// Tag 10 (CheckSum).
pub const CHECKSUM: u32 = 10;

// ---------------------------------------------------------------------------
// Order / execution fields
// ---------------------------------------------------------------------------

/// Tag 11 (ClOrdID): unique identifier for an order assigned by the client.
pub const CL_ORD_ID: u32 = 11;

/// Tag 55 (Symbol).
pub const SYMBOL: u32 = 55;

/// Tag 150 (ExecType): execution report type code.
pub const EXEC_TYPE: u32 = 150;

/// Tag 39 (OrdStatus): current status of an order.
///
/// Only ever carried by execution reports (35=8) in the logs we scan.
pub const ORD_STATUS: u32 = 39;

// ---------------------------------------------------------------------------
// Values and delimiters
// ---------------------------------------------------------------------------

/// MsgType value for an ExecutionReport.
pub const MSG_TYPE_EXECUTION_REPORT: &str = "8";

/// SOH byte: the FIX field delimiter (ASCII 0x01).
pub const SOH: u8 = 0x01;

/// SOH as a string slice, for splitting `&str` lines.
pub const SOH_STR: &str = "\x01";

/// `"<tag>="`: the prefix every field with this tag starts with.
#[inline]
pub fn field_prefix(tag: u32) -> String {
    format!("{tag}=")
}

/// `"<tag>=<value>"`: one complete field without its delimiter.
#[inline]
pub fn field(tag: u32, value: &str) -> String {
    format!("{tag}={value}")
}

/// Default execution-report marker: `"35=8"`.
pub fn execution_report_marker() -> String {
    field(MSG_TYPE, MSG_TYPE_EXECUTION_REPORT)
}

/// Default order-status prefix: `"39="`.
pub fn order_status_prefix() -> String {
    field_prefix(ORD_STATUS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

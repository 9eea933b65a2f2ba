/// The data phase of a [Transaction], which also fixes its direction.
#[derive(Debug)]
pub enum Payload<'a> {
    /// Half duplex read into the buffer.
    Read(&'a mut [u8]),
    /// Half duplex write from the buffer.
    Write(&'a [u8]),
    /// Full duplex: clock `tx` out while reading into `rx`.
    ///
    /// Both buffers cover the same clock cycles, so they have the same
    /// length.
    ReadWrite { rx: &'a mut [u8], tx: &'a [u8] },
}

impl Payload<'_> {
    /// The number of data bytes this payload moves.
    #[inline(always)]
    pub fn len(&self) -> usize {
        match self {
            Self::Read(rx) => rx.len(),
            Self::Write(tx) => tx.len(),
            Self::ReadWrite { rx, .. } => rx.len(),
        }
    }

    /// Does this payload move no data bytes?
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One blocking transaction, in the shape the underlying transfer
/// engine consumes.
///
/// Borrows its buffers and never outlives the call that issues it.
#[derive(Debug)]
pub struct Transaction<'a> {
    /// An instruction byte clocked out before the data phase, if any.
    pub instruction: Option<u8>,
    /// The data phase buffers and direction.
    pub payload: Payload<'a>,
    /// Keep chip select asserted when the transfer completes, so the
    /// next transaction continues the same device transaction.
    pub cont: bool,
    /// The resolved physical chip select channel to assert.
    pub channel: u32,
}

//! `<Refer>` and its SIP target

verb! {
    /// `<Refer>` transfers the call to another SIP infrastructure.
    ///
    /// The original call is replaced by a call to the [`ReferSip`] target.
    Refer("Refer") {
        attrs {
            action: "Action",
            method: "Method",
        }
    }
}

verb! {
    /// `<Sip>` noun used inside [`Refer`]. It only carries the URI.
    ReferSip("Sip") {
        text sip_url,
        attrs {}
    }
}

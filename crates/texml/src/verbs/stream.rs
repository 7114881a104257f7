//! Media streaming verbs

verb! {
    /// `<Start>` begins an asynchronous instruction such as [`Stream`].
    Start("Start") {
        attrs {}
    }
}

verb! {
    /// `<Stop>` stops the instruction named by its nested noun.
    Stop("Stop") {
        attrs {}
    }
}

verb! {
    /// `<Stream>` forks call media to a WebSocket at `url`.
    ///
    /// Audio arrives as base64 RTP payloads wrapped in JSON messages.
    Stream("Stream") {
        attrs {
            url: "Url",
            track: "Track",
            name: "Name",
            codec: "Codec",
            bidirectional_mode: "BidirectionalMode",
            bidirectional_codec: "BidirectionalCodec",
        }
    }
}

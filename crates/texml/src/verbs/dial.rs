//! `<Dial>` and the nouns it connects to

verb! {
    /// `<Dial>` transfers the current call to another destination.
    ///
    /// The new leg ends if the called party does not answer, the number does
    /// not exist or the platform receives a busy signal. Nest [`Number`],
    /// [`Sip`] or [`Conference`] to choose the destination.
    Dial("Dial") {
        text number,
        attrs {
            action: "Action",
            method: "Method",
            caller_id: "CallerId",
            from_display_name: "FromDisplayName",
            hangup_on_star: "HangupOnStar",
            timeout: "Timeout",
            time_limit: "TimeLimit",
            record: "Record",
            recording_channels: "RecordingChannels",
            record_max_length: "RecordMaxLength",
            recording_status_callback: "RecordingStatusCallback",
            recording_status_callback_method: "RecordingStatusCallbackMethod",
            recording_status_callback_event: "RecordingStatusCallbackEvent",
            ring_tone: "RingTone",
        }
    }
}

verb! {
    /// `<Number>` noun: a phone number to dial inside [`Dial`]
    Number("Number") {
        text phone_number,
        attrs {
            status_callback: "StatusCallback",
            status_callback_event: "StatusCallbackEvent",
            status_callback_method: "StatusCallbackMethod",
            url: "Url",
            method: "Method",
            send_digits: "SendDigits",
            machine_detection: "MachineDetection",
            detection_mode: "DetectionMode",
            machine_detection_timeout: "MachineDetectionTimeout",
        }
    }
}

verb! {
    /// `<Sip>` noun: a SIP URI to dial inside [`Dial`]
    Sip("Sip") {
        text sip_url,
        attrs {
            username: "Username",
            password: "Password",
            status_callback: "StatusCallback",
            status_callback_event: "StatusCallbackEvent",
            status_callback_method: "StatusCallbackMethod",
            url: "Url",
            method: "Method",
            machine_detection: "MachineDetection",
            detection_mode: "DetectionMode",
            machine_detection_timeout: "MachineDetectionTimeout",
        }
    }
}

verb! {
    /// `<Conference>` noun: connects the call to a named conference room.
    ///
    /// The room is created when it does not exist yet.
    Conference("Conference") {
        text name,
        attrs {
            muted: "Muted",
            start_conference_on_enter: "StartConferenceOnEnter",
            end_conference_on_exit: "EndConferenceOnExit",
            max_participants: "MaxParticipants",
            beep: "Beep",
            record: "Record",
            record_beep: "RecordBeep",
            recording_status_callback: "RecordingStatusCallback",
            recording_status_callback_event: "RecordingStatusCallbackEvent",
            recording_status_callback_method: "RecordingStatusCallbackMethod",
            recording_timeout: "RecordingTimeout",
            trim: "Trim",
            status_callback: "StatusCallback",
            status_callback_event: "StatusCallbackEvent",
            status_callback_method: "StatusCallbackMethod",
            wait_url: "WaitUrl",
            wait_method: "WaitMethod",
        }
    }
}

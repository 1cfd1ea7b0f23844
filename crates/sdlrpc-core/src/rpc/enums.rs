//! Enum vocabularies used by the catalog.

use crate::error::Result;
use crate::wire_enum;

use super::check_enum;

wire_enum! {
    pub enum ButtonName {
        Ok = "OK",
        SeekLeft = "SEEKLEFT",
        SeekRight = "SEEKRIGHT",
        TuneUp = "TUNEUP",
        TuneDown = "TUNEDOWN",
        Preset0 = "PRESET_0",
        Preset1 = "PRESET_1",
        Preset2 = "PRESET_2",
        Preset3 = "PRESET_3",
        Preset4 = "PRESET_4",
        Preset5 = "PRESET_5",
        Preset6 = "PRESET_6",
        Preset7 = "PRESET_7",
        Preset8 = "PRESET_8",
        Preset9 = "PRESET_9",
        CustomButton = "CUSTOM_BUTTON",
        Search = "SEARCH",
    }
}

wire_enum! {
    pub enum ButtonPressMode {
        Long = "LONG",
        Short = "SHORT",
    }
}

wire_enum! {
    /// Outcome carried by responses.
    pub enum ResultCode {
        Success = "SUCCESS",
        InvalidData = "INVALID_DATA",
        UnsupportedRequest = "UNSUPPORTED_REQUEST",
        OutOfMemory = "OUT_OF_MEMORY",
        TooManyPendingRequests = "TOO_MANY_PENDING_REQUESTS",
        InvalidId = "INVALID_ID",
        DuplicateName = "DUPLICATE_NAME",
        TooManyApplications = "TOO_MANY_APPLICATIONS",
        ApplicationRegisteredAlready = "APPLICATION_REGISTERED_ALREADY",
        UnsupportedVersion = "UNSUPPORTED_VERSION",
        WrongLanguage = "WRONG_LANGUAGE",
        ApplicationNotRegistered = "APPLICATION_NOT_REGISTERED",
        InUse = "IN_USE",
        VehicleDataNotAllowed = "VEHICLE_DATA_NOT_ALLOWED",
        VehicleDataNotAvailable = "VEHICLE_DATA_NOT_AVAILABLE",
        Rejected = "REJECTED",
        Aborted = "ABORTED",
        Ignored = "IGNORED",
        UnsupportedResource = "UNSUPPORTED_RESOURCE",
        FileNotFound = "FILE_NOT_FOUND",
        GenericError = "GENERIC_ERROR",
        Disallowed = "DISALLOWED",
        UserDisallowed = "USER_DISALLOWED",
        TimedOut = "TIMED_OUT",
        CancelRoute = "CANCEL_ROUTE",
        TruncatedData = "TRUNCATED_DATA",
        Retry = "RETRY",
        Warnings = "WARNINGS",
        Saved = "SAVED",
        InvalidCert = "INVALID_CERT",
        ExpiredCert = "EXPIRED_CERT",
        ResumeFailed = "RESUME_FAILED",
    }
}

wire_enum! {
    pub enum RequestType {
        Http = "HTTP",
        FileResume = "FILE_RESUME",
        AuthRequest = "AUTH_REQUEST",
        AuthChallenge = "AUTH_CHALLENGE",
        AuthAck = "AUTH_ACK",
        Proprietary = "PROPRIETARY",
    }
}

wire_enum! {
    pub enum SystemAction {
        DefaultAction = "DEFAULT_ACTION",
        StealFocus = "STEAL_FOCUS",
        KeepContext = "KEEP_CONTEXT",
    }
}

wire_enum! {
    pub enum VehicleDataStatus {
        NoDataExists = "NO_DATA_EXISTS",
        Off = "OFF",
        On = "ON",
    }
}

wire_enum! {
    /// Gear selector position.
    pub enum Prndl {
        Park = "PARK",
        Reverse = "REVERSE",
        Neutral = "NEUTRAL",
        Drive = "DRIVE",
        Sport = "SPORT",
        LowGear = "LOWGEAR",
        First = "FIRST",
        Second = "SECOND",
        Third = "THIRD",
        Fourth = "FOURTH",
        Fifth = "FIFTH",
        Sixth = "SIXTH",
        Seventh = "SEVENTH",
        Eighth = "EIGHTH",
        Unknown = "UNKNOWN",
        Fault = "FAULT",
    }
}

wire_enum! {
    pub enum ComponentVolumeStatus {
        Unknown = "UNKNOWN",
        Normal = "NORMAL",
        Low = "LOW",
        Fault = "FAULT",
        Alert = "ALERT",
        NotSupported = "NOT_SUPPORTED",
    }
}

wire_enum! {
    pub enum AmbientLightStatus {
        Night = "NIGHT",
        Twilight1 = "TWILIGHT_1",
        Twilight2 = "TWILIGHT_2",
        Twilight3 = "TWILIGHT_3",
        Twilight4 = "TWILIGHT_4",
        Day = "DAY",
        Unknown = "UNKNOWN",
        Invalid = "INVALID",
    }
}

wire_enum! {
    pub enum VehicleDataEventStatus {
        NoEvent = "NO_EVENT",
        No = "NO",
        Yes = "YES",
        NotSupported = "NOT_SUPPORTED",
        Fault = "FAULT",
    }
}

wire_enum! {
    pub enum WiperStatus {
        Off = "OFF",
        AutoOff = "AUTO_OFF",
        OffMoving = "OFF_MOVING",
        ManIntOff = "MAN_INT_OFF",
        ManIntOn = "MAN_INT_ON",
        ManLow = "MAN_LOW",
        ManHigh = "MAN_HIGH",
        ManFlick = "MAN_FLICK",
        Wash = "WASH",
        AutoLow = "AUTO_LOW",
        AutoHigh = "AUTO_HIGH",
        CourtesyWipe = "COURTESYWIPE",
        AutoAdjust = "AUTO_ADJUST",
        Stalled = "STALLED",
        NoDataExists = "NO_DATA_EXISTS",
    }
    renamed {
        CourtesyWipe: 5 => "COURTESY_WIPE",
    }
}

wire_enum! {
    pub enum FileType {
        GraphicBmp = "GRAPHIC_BMP",
        GraphicJpeg = "GRAPHIC_JPEG",
        GraphicPng = "GRAPHIC_PNG",
        AudioWave = "AUDIO_WAVE",
        AudioMp3 = "AUDIO_MP3",
        AudioAac = "AUDIO_AAC",
        Binary = "BINARY",
        Json = "JSON",
    }
}

wire_enum! {
    /// Image slots a head unit can render.
    pub enum ImageFieldName {
        SoftButtonImage = "softButtonImage",
        ChoiceImage = "choiceImage",
        ChoiceSecondaryImage = "choiceSecondaryImage",
        VrHelpItem = "vrHelpItem",
        TurnIcon = "turnIcon",
        MenuIcon = "menuIcon",
        CmdIcon = "cmdIcon",
        AppIcon = "appIcon",
        Graphic = "graphic",
        ShowConstantTbtIcon = "showConstantTBTIcon",
        ShowConstantTbtNextTurnIcon = "showConstantTBTNextTurnIcon",
    }
}

wire_enum! {
    pub enum FuelType {
        Gasoline = "GASOLINE",
        Diesel = "DIESEL",
        Cng = "CNG",
        Lpg = "LPG",
        Hydrogen = "HYDROGEN",
        Battery = "BATTERY",
    }
}

pub(crate) fn validate() -> Result<()> {
    check_enum::<ButtonName>()?;
    check_enum::<ButtonPressMode>()?;
    check_enum::<ResultCode>()?;
    check_enum::<RequestType>()?;
    check_enum::<SystemAction>()?;
    check_enum::<VehicleDataStatus>()?;
    check_enum::<Prndl>()?;
    check_enum::<ComponentVolumeStatus>()?;
    check_enum::<AmbientLightStatus>()?;
    check_enum::<VehicleDataEventStatus>()?;
    check_enum::<WiperStatus>()?;
    check_enum::<FileType>()?;
    check_enum::<ImageFieldName>()?;
    check_enum::<FuelType>()?;
    Ok(())
}

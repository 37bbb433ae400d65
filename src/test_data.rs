/// A DSMR 5 telegram with winter time stamps and multi-value lines.
pub const TELEGRAM_1: &[u8] = b"\
    /ISk5\\2MT382-1000\r\n\
    \r\n\
    1-3:0.2.8(50)\r\n\
    0-0:1.0.0(101209113020W)\r\n\
    0-0:96.1.1(4B384547303034303436333935353037)\r\n\
    1-0:1.8.1(123456.789*kWh)\r\n\
    1-0:1.8.2(123456.789*kWh)\r\n\
    1-0:2.8.1(123456.789*kWh)\r\n\
    1-0:2.8.2(123456.789*kWh)\r\n\
    0-0:96.14.0(0002)\r\n\
    1-0:1.7.0(01.193*kW)\r\n\
    1-0:2.7.0(00.000*kW)\r\n\
    1-0:99.97.0(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)\r\n\
    1-0:32.7.0(220.1*V)\r\n\
    0-1:24.2.1(101209112500W)(12785.123*m3)\r\n\
    !E40F\r\n\
    ";

/// A short DSMR 5 telegram with a summer time stamp.
pub const TELEGRAM_2: &[u8] = b"\
    /XMX5LGBBFG1009021021\r\n\
    \r\n\
    1-3:0.2.8(50)\r\n\
    0-0:1.0.0(210630235959S)\r\n\
    1-0:1.8.1(000042.001*kWh)\r\n\
    1-0:1.7.0(00.250*kW)\r\n\
    !5E99\r\n\
    ";

/// The smallest possible valid frame.
pub const TELEGRAM_EMPTY: &[u8] = b"\
    /XXX5\r\n\
    \r\n\
    !4B22\r\n\
    ";

/// A frame with identifier `ABC` and one time stamp field.
pub const TELEGRAM_ABC: &[u8] = b"\
    /XXX5ABC\r\n\
    \r\n\
    0-0:1.0.0(210101120000S)\r\n\
    !337B\r\n\
    ";

/// Line noise, `TELEGRAM_1`, `TELEGRAM_2` and a truncated frame.
pub const STREAM_1: &[u8] = b"\
    \x00\xFFnoise/ISk5\\2MT382-1000\r\n\
    \r\n\
    1-3:0.2.8(50)\r\n\
    0-0:1.0.0(101209113020W)\r\n\
    0-0:96.1.1(4B384547303034303436333935353037)\r\n\
    1-0:1.8.1(123456.789*kWh)\r\n\
    1-0:1.8.2(123456.789*kWh)\r\n\
    1-0:2.8.1(123456.789*kWh)\r\n\
    1-0:2.8.2(123456.789*kWh)\r\n\
    0-0:96.14.0(0002)\r\n\
    1-0:1.7.0(01.193*kW)\r\n\
    1-0:2.7.0(00.000*kW)\r\n\
    1-0:99.97.0(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)\r\n\
    1-0:32.7.0(220.1*V)\r\n\
    0-1:24.2.1(101209112500W)(12785.123*m3)\r\n\
    !E40F\r\n\
    /XMX5LGBBFG1009021021\r\n\
    \r\n\
    1-3:0.2.8(50)\r\n\
    0-0:1.0.0(210630235959S)\r\n\
    1-0:1.8.1(000042.001*kWh)\r\n\
    1-0:1.7.0(00.250*kW)\r\n\
    !5E99\r\n\
    /XXX5\r\n\
    \r\n\
    !01";


//! IPv4 and IPv6 address candidates, with optional CIDR prefixes.
//!
//! The candidates validate shape and component ranges (octets 0-255,
//! hextets 0-ffff, single `::` truncation); the numeric range of a CIDR
//! prefix is left to operand construction, which has the token to point
//! at.

/// Four dot-separated octets, optionally followed by `/` and digits.
pub(crate) struct Ipv4Candidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
    octet: String,
    octets: u8,
    prefix: bool,
}

impl Ipv4Candidate {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            complete: false,
            octet: String::new(),
            octets: 0,
            prefix: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if self.prefix {
            return if c.is_ascii_digit() {
                self.text.push(c);
                self.complete = true;
                Ok(())
            } else {
                Err("invalid prefix character")
            };
        }
        if c == '.' {
            if self.octets == 3 {
                Err("too many octets")
            } else if self.octet.is_empty() {
                Err("empty octet")
            } else {
                self.text.push(c);
                self.octets += 1;
                self.octet.clear();
                self.complete = false;
                Ok(())
            }
        } else if c.is_ascii_digit() {
            self.octet.push(c);
            match self.octet.parse::<u32>() {
                Ok(value) if value <= 255 => {
                    self.text.push(c);
                    self.complete = self.octets == 3;
                    Ok(())
                }
                _ => {
                    self.complete = false;
                    Err("octet must be between 0 and 255")
                }
            }
        } else if c == '/' && self.complete {
            self.text.push(c);
            self.prefix = true;
            self.complete = false;
            Ok(())
        } else {
            Err("invalid IPv4 character")
        }
    }
}

/// Colon-separated hextets with at most one `::` truncation, optionally
/// followed by `/` and digits.
pub(crate) struct Ipv6Candidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
    hextet: String,
    hextets: u8,
    trunc: bool,
    prefix: bool,
}

impl Ipv6Candidate {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            complete: false,
            hextet: String::new(),
            hextets: 0,
            trunc: false,
            prefix: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if self.prefix {
            return if c.is_ascii_digit() {
                self.text.push(c);
                self.complete = true;
                Ok(())
            } else {
                Err("invalid prefix character")
            };
        }
        if c == ':' {
            if self.text.is_empty() {
                self.text.push(c);
                Ok(())
            } else if self.hextets == 7 {
                Err("too many hextets")
            } else if self.text.ends_with(':') {
                if self.trunc {
                    self.complete = false;
                    Err("double truncation")
                } else if self.hextets == 6 {
                    self.complete = false;
                    Err("insufficient truncation")
                } else {
                    self.text.push(c);
                    self.trunc = true;
                    self.hextets += 2;
                    self.complete = true;
                    Ok(())
                }
            } else {
                self.text.push(c);
                self.hextet.clear();
                self.hextets += 1;
                if !self.complete {
                    self.complete = self.hextets == 7;
                }
                Ok(())
            }
        } else if c.is_ascii_hexdigit() {
            self.hextet.push(c);
            match u32::from_str_radix(&self.hextet, 16) {
                Ok(value) if value <= 0xffff => {
                    self.text.push(c);
                    Ok(())
                }
                _ => Err("hextet must be between 0 and ffff"),
            }
        } else if c == '/' && self.complete {
            self.text.push(c);
            self.prefix = true;
            self.complete = false;
            Ok(())
        } else {
            Err("invalid IPv6 character")
        }
    }
}

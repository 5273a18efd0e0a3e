// token          = 1*tchar
// tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
//                / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
//                / DIGIT / ALPHA
//                ; any VCHAR, except delimiters
// delimiters     = DQUOTE and "(),/:;<=>?@[\]{}
//
// See https://tools.ietf.org/html/rfc7230#section-3.2.6
#[rustfmt::skip]
static TCHAR: [bool; 256] = {
    const __: bool = false;
    const TT: bool = true;
    [
//      \0                                  HT  LF          CR
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
//      SP  !   "   #   $   %   &   '   (   )   *   +   ,   -   .   /
        __, TT, __, TT, TT, TT, TT, TT, __, __, TT, TT, __, TT, TT, __,
//      0   1   2   3   4   5   6   7   8   9   :   ;   <   =   >   ?
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, __, __, __, __, __,
//      @   A   B   C   D   E   F   G   H   I   J   K   L   M   N   O
        __, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT,
//      P   Q   R   S   T   U   V   W   X   Y   Z   [   \   ]   ^   _
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, __, __, TT, TT,
//      `   a   b   c   d   e   f   g   h   i   j   k   l   m   n   o
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT,
//      p   q   r   s   t   u   v   w   x   y   z   {   |   }   ~   DEL
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, TT, __, TT, __,
// 0x80 and above
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
    ]
};

// cookie-value   = *cookie-octet / ( DQUOTE *cookie-octet DQUOTE )
// cookie-octet   = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
//                ; US-ASCII characters excluding CTLs,
//                ; whitespace DQUOTE, comma, semicolon,
//                ; and backslash
//
// See https://tools.ietf.org/html/rfc6265#section-4.1.1
#[rustfmt::skip]
static COOKIE_OCTET: [bool; 256] = {
    const __: bool = false;
    const TT: bool = true;
    [
//      \0                                  HT  LF          CR
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
//      SP  !   "   #   $   %   &   '   (   )   *   +   ,   -   .   /
        __, TT, __, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, TT, TT, TT,
//      0   1   2   3   4   5   6   7   8   9   :   ;   <   =   >   ?
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, TT, TT, TT, TT,
//      @   A   B   C   D   E   F   G   H   I   J   K   L   M   N   O
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT,
//      P   Q   R   S   T   U   V   W   X   Y   Z   [   \   ]   ^   _
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __, TT, TT, TT,
//      `   a   b   c   d   e   f   g   h   i   j   k   l   m   n   o
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT,
//      p   q   r   s   t   u   v   w   x   y   z   {   |   }   ~   DEL
        TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, TT, __,
// 0x80 and above
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __,
    ]
};

pub const DQUOTE: u8 = b'"';

/// `tchar`, the bytes allowed in a token (header field names, methods...)
#[inline]
pub fn is_tchar(byte: u8) -> bool {
    TCHAR[byte as usize]
}

/// `cookie-octet`, the bytes allowed in a cookie value (quotes excluded)
#[inline]
pub fn is_cookie_octet(byte: u8) -> bool {
    COOKIE_OCTET[byte as usize]
}

/// Index of the first byte of `bytes` rejected by `class`, if any.
pub(crate) fn find_invalid(bytes: &[u8], class: fn(u8) -> bool) -> Option<usize> {
    bytes.iter().position(|&b| !class(b))
}

use super::const_error;

const_error!(
    INTERNAL,
    INTERNAL_SERVER_ERROR,
    "internal",
    "internal server error"
);
const_error!(
    DATABASE_ERROR,
    INTERNAL_SERVER_ERROR,
    "database-error",
    "internal server error"
);
const_error!(
    JSON_MISSING_FIELDS,
    BAD_REQUEST,
    "json-missing-fields",
    "missing or invalid fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "json-syntax-error", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "json-content-type",
    "missing or wrong content-type"
);
const_error!(
    INVALID_CREDENTIALS,
    BAD_REQUEST,
    "invalid-credentials",
    "Invalid credentials"
);
const_error!(
    DUPLICATE_EMAIL,
    BAD_REQUEST,
    "duplicate-email",
    "User with this email already exists"
);
const_error!(
    DUPLICATE_USERNAME,
    BAD_REQUEST,
    "duplicate-username",
    "Username already taken"
);
const_error!(
    DUPLICATE_PROBLEM_TITLE,
    BAD_REQUEST,
    "duplicate-problem-title",
    "A problem with this title already exists."
);
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "could-not-get-claims",
    "Not authorized, token failed"
);
const_error!(
    NOT_ENOUGH_PERMISSIONS,
    FORBIDDEN,
    "not-enough-permissions",
    "Not authorized as an admin"
);
const_error!(
    PROBLEM_NOT_FOUND,
    NOT_FOUND,
    "problem-not-found",
    "Problem not found."
);
const_error!(
    INVALID_PROBLEM_ID,
    BAD_REQUEST,
    "invalid-problem-id",
    "Invalid problem ID format."
);

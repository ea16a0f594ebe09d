mod form_state;
mod rules;

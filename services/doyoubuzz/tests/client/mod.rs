mod calls;
mod live;

//! Algorithms available in streaming mode
//!
//! The native streaming registry also lists a handful of algorithms whose
//! info lookup fails; those are not catalogued here, see
//! [`KNOWN_UNSUPPORTED_STREAMING`](crate::audit::KNOWN_UNSUPPORTED_STREAMING).

algorithms! {
    /// Identifier of every algorithm catalogued for streaming mode
    pub enum StreamingId in Streaming {
        // Rhythm
        BeatTrackerDegara: Rhythm {
            inputs: ["signal"],
            outputs: ["ticks"],
            parameters: ["maxTempo", "minTempo"],
        },
        BeatTrackerMultiFeature: Rhythm {
            inputs: ["signal"],
            outputs: ["ticks", "confidence"],
            parameters: ["maxTempo", "minTempo"],
        },
        Beatogram: Rhythm {
            inputs: ["loudness", "loudnessBandRatio"],
            outputs: ["beatogram"],
            parameters: ["size"],
        },
        BeatsLoudness: Rhythm {
            inputs: ["signal"],
            outputs: ["loudness", "loudnessBandRatio"],
            parameters: [
                "beatDuration", "beatWindowDuration", "beats", "frequencyBands", "sampleRate",
            ],
        },
        BpmHistogram: Rhythm {
            inputs: ["novelty"],
            outputs: [
                "bpm", "bpmCandidates", "bpmMagnitudes", "tempogram", "frameBpms", "ticks",
                "ticksMagnitude", "sinusoid",
            ],
            parameters: [
                "bpm", "constantTempo", "frameRate", "frameSize", "maxBpm", "maxPeaks", "minBpm",
                "overlap", "tempoChange", "weightByMagnitude", "windowType", "zeroPadding",
            ],
        },
        BpmHistogramDescriptors: Rhythm {
            inputs: ["bpmIntervals"],
            outputs: [
                "firstPeakBPM", "firstPeakWeight", "firstPeakSpread", "secondPeakBPM",
                "secondPeakWeight", "secondPeakSpread", "histogram",
            ],
            parameters: [],
        },
        BpmRubato: Rhythm {
            inputs: ["beats"],
            outputs: ["rubatoStart", "rubatoStop", "rubatoNumber"],
            parameters: ["longRegionsPruningTime", "shortRegionsMergingTime", "tolerance"],
        },
        Danceability: Rhythm {
            inputs: ["signal"],
            outputs: ["danceability", "dfa"],
            parameters: ["maxTau", "minTau", "sampleRate", "tauMultiplier"],
        },
        HarmonicBpm: Rhythm {
            inputs: ["bpms"],
            outputs: ["harmonicBpms"],
            parameters: ["bpm", "threshold", "tolerance"],
        },
        LoopBpmConfidence: Rhythm {
            inputs: ["signal", "bpmEstimate"],
            outputs: ["confidence"],
            parameters: ["sampleRate"],
        },
        LoopBpmEstimator: Rhythm {
            inputs: ["signal"],
            outputs: ["bpm"],
            parameters: ["confidenceThreshold"],
        },
        Meter: Rhythm {
            inputs: ["beatogram"],
            outputs: ["meter"],
            parameters: [],
        },
        NoveltyCurve: Rhythm {
            inputs: ["frequencyBands"],
            outputs: ["novelty"],
            parameters: ["frameRate", "normalize", "weightCurve", "weightCurveType"],
        },
        OnsetDetection: Rhythm {
            inputs: ["spectrum", "phase"],
            outputs: ["onsetDetection"],
            parameters: ["method", "sampleRate"],
        },
        OnsetDetectionGlobal: Rhythm {
            inputs: ["signal"],
            outputs: ["onsetDetections"],
            parameters: ["frameSize", "hopSize", "method", "sampleRate"],
        },
        OnsetRate: Rhythm {
            inputs: ["signal"],
            outputs: ["onsets", "onsetRate"],
            parameters: [],
        },
        Onsets: Rhythm {
            inputs: ["detections", "weights"],
            outputs: ["onsets"],
            parameters: ["alpha", "delay", "frameRate", "silenceThreshold"],
        },
        PercivalBpmEstimator: Rhythm {
            inputs: ["signal"],
            outputs: ["bpm"],
            parameters: [
                "frameSize", "frameSizeOSS", "hopSize", "hopSizeOSS", "maxBPM", "minBPM",
                "sampleRate",
            ],
        },
        PercivalEnhanceHarmonics: Rhythm {
            inputs: ["array"],
            outputs: ["array"],
            parameters: [],
        },
        PercivalEvaluatePulseTrains: Rhythm {
            inputs: ["oss", "positions"],
            outputs: ["lag"],
            parameters: [],
        },
        RhythmDescriptors: Rhythm {
            inputs: ["signal"],
            outputs: [
                "beats_position", "confidence", "bpm", "bpm_estimates", "bpm_intervals",
                "first_peak_bpm", "first_peak_spread", "first_peak_weight", "second_peak_bpm",
                "second_peak_spread", "second_peak_weight", "histogram",
            ],
            parameters: [],
        },
        RhythmExtractor: Rhythm {
            inputs: ["signal"],
            outputs: ["bpm", "ticks", "estimates", "bpmIntervals"],
            parameters: [
                "frameHop", "frameSize", "hopSize", "lastBeatInterval", "maxTempo", "minTempo",
                "numberFrames", "sampleRate", "tempoHints", "tolerance", "useBands", "useOnset",
            ],
        },
        RhythmExtractor2013: Rhythm {
            inputs: ["signal"],
            outputs: ["bpm", "ticks", "confidence", "estimates", "bpmIntervals"],
            parameters: ["maxTempo", "method", "minTempo"],
        },
        RhythmTransform: Rhythm {
            inputs: ["melBands"],
            outputs: ["rhythm"],
            parameters: ["frameSize", "hopSize"],
        },
        SingleBeatLoudness: Rhythm {
            inputs: ["beat"],
            outputs: ["loudness", "loudnessBandRatio"],
            parameters: [
                "beatDuration", "beatWindowDuration", "frequencyBands", "onsetStart", "sampleRate",
            ],
        },
        SuperFluxExtractor: Rhythm {
            inputs: ["signal"],
            outputs: ["onsets"],
            parameters: [
                "combine", "frameSize", "hopSize", "ratioThreshold", "sampleRate", "threshold",
            ],
        },
        SuperFluxNovelty: Rhythm {
            inputs: ["bands"],
            outputs: ["differences"],
            parameters: ["binWidth", "frameWidth"],
        },
        SuperFluxPeaks: Rhythm {
            inputs: ["novelty"],
            outputs: ["peaks"],
            parameters: [
                "combine", "frameRate", "pre_avg", "pre_max", "ratioThreshold", "threshold",
            ],
        },
        TempoScaleBands: Rhythm {
            inputs: ["bands"],
            outputs: ["scaledBands", "cumulativeBands"],
            parameters: ["bandsGain", "frameTime"],
        },
        TempoTap: Rhythm {
            inputs: ["featuresFrame"],
            outputs: ["periods", "phases"],
            parameters: [
                "frameHop", "frameSize", "maxTempo", "minTempo", "numberFrames", "sampleRate",
                "tempoHints",
            ],
        },
        TempoTapDegara: Rhythm {
            inputs: ["onsetDetections"],
            outputs: ["ticks"],
            parameters: ["maxTempo", "minTempo", "resample", "sampleRateODF"],
        },
        TempoTapMaxAgreement: Rhythm {
            inputs: ["tickCandidates"],
            outputs: ["ticks", "confidence"],
            parameters: [],
        },
        TempoTapTicks: Rhythm {
            inputs: ["periods", "phases"],
            outputs: ["ticks", "matchingPeriods"],
            parameters: ["frameHop", "hopSize", "sampleRate"],
        },

        // Pitch
        MultiPitchMelodia: Pitch {
            inputs: ["signal"],
            outputs: ["pitch"],
            parameters: [
                "binResolution", "filterIterations", "frameSize", "guessUnvoiced", "harmonicWeight",
                "hopSize", "magnitudeCompression", "magnitudeThreshold", "maxFrequency",
                "minDuration", "minFrequency", "numberHarmonics", "peakDistributionThreshold",
                "peakFrameThreshold", "pitchContinuity", "referenceFrequency", "sampleRate",
                "timeContinuity",
            ],
        },
        PitchContours: Pitch {
            inputs: ["peakBins", "peakSaliences"],
            outputs: ["contoursBins", "contoursSaliences", "contoursStartTimes", "duration"],
            parameters: [
                "binResolution", "hopSize", "minDuration", "peakDistributionThreshold",
                "peakFrameThreshold", "pitchContinuity", "sampleRate", "timeContinuity",
            ],
        },
        PitchContoursMelody: Pitch {
            inputs: ["contoursBins", "contoursSaliences", "contoursStartTimes", "duration"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "binResolution", "filterIterations", "guessUnvoiced", "hopSize", "maxFrequency",
                "minFrequency", "referenceFrequency", "sampleRate", "voiceVibrato",
                "voicingTolerance",
            ],
        },
        PitchContoursMonoMelody: Pitch {
            inputs: ["contoursBins", "contoursSaliences", "contoursStartTimes", "duration"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "binResolution", "filterIterations", "guessUnvoiced", "hopSize", "maxFrequency",
                "minFrequency", "referenceFrequency", "sampleRate",
            ],
        },
        PitchContoursMultiMelody: Pitch {
            inputs: ["contoursBins", "contoursSaliences", "contoursStartTimes", "duration"],
            outputs: ["pitch"],
            parameters: [
                "binResolution", "filterIterations", "guessUnvoiced", "hopSize", "maxFrequency",
                "minFrequency", "referenceFrequency", "sampleRate",
            ],
        },
        PitchFilter: Pitch {
            inputs: ["pitch", "pitchConfidence"],
            outputs: ["pitchFiltered"],
            parameters: ["confidenceThreshold", "minChunkSize", "useAbsolutePitchConfidence"],
        },
        PitchMelodia: Pitch {
            inputs: ["signal"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "binResolution", "filterIterations", "frameSize", "guessUnvoiced", "harmonicWeight",
                "hopSize", "magnitudeCompression", "magnitudeThreshold", "maxFrequency",
                "minDuration", "minFrequency", "numberHarmonics", "peakDistributionThreshold",
                "peakFrameThreshold", "pitchContinuity", "referenceFrequency", "sampleRate",
                "timeContinuity",
            ],
        },
        PitchSalienceFunction: Pitch {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["salienceFunction"],
            parameters: [
                "binResolution", "harmonicWeight", "magnitudeCompression", "magnitudeThreshold",
                "numberHarmonics", "referenceFrequency",
            ],
        },
        PitchSalienceFunctionPeaks: Pitch {
            inputs: ["salienceFunction"],
            outputs: ["salienceBins", "salienceValues"],
            parameters: ["binResolution", "maxFrequency", "minFrequency", "referenceFrequency"],
        },
        PitchYin: Pitch {
            inputs: ["signal"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "frameSize", "interpolate", "maxFrequency", "minFrequency", "sampleRate",
                "tolerance",
            ],
        },
        PitchYinFFT: Pitch {
            inputs: ["spectrum"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "frameSize", "interpolate", "maxFrequency", "minFrequency", "sampleRate",
                "tolerance",
            ],
        },
        PredominantPitchMelodia: Pitch {
            inputs: ["signal"],
            outputs: ["pitch", "pitchConfidence"],
            parameters: [
                "binResolution", "filterIterations", "frameSize", "guessUnvoiced", "harmonicWeight",
                "hopSize", "magnitudeCompression", "magnitudeThreshold", "maxFrequency",
                "minDuration", "minFrequency", "numberHarmonics", "peakDistributionThreshold",
                "peakFrameThreshold", "pitchContinuity", "referenceFrequency", "sampleRate",
                "timeContinuity", "voiceVibrato", "voicingTolerance",
            ],
        },
        Vibrato: Pitch {
            inputs: ["pitch"],
            outputs: ["vibratoFrequency", "vibratoExtend"],
            parameters: ["maxExtend", "maxFrequency", "minExtend", "minFrequency", "sampleRate"],
        },

        // Synthesis
        HarmonicMask: Synthesis {
            inputs: ["fft", "pitch"],
            outputs: ["fft"],
            parameters: ["attenuation", "binWidth", "sampleRate"],
        },
        HarmonicModelAnal: Synthesis {
            inputs: ["fft", "pitch"],
            outputs: ["frequencies", "magnitudes", "phases"],
            parameters: [
                "freqDevOffset", "freqDevSlope", "harmDevSlope", "hopSize", "magnitudeThreshold",
                "maxFrequency", "maxPeaks", "maxnSines", "minFrequency", "nHarmonics", "orderBy",
                "sampleRate",
            ],
        },
        HprModelAnal: Synthesis {
            inputs: ["frame", "pitch"],
            outputs: ["frequencies", "magnitudes", "phases", "res"],
            parameters: [
                "fftSize", "freqDevOffset", "freqDevSlope", "harmDevSlope", "hopSize",
                "magnitudeThreshold", "maxFrequency", "maxPeaks", "maxnSines", "minFrequency",
                "nHarmonics", "orderBy", "sampleRate", "stocf",
            ],
        },
        HpsModelAnal: Synthesis {
            inputs: ["frame", "pitch"],
            outputs: ["frequencies", "magnitudes", "phases", "stocenv"],
            parameters: [
                "fftSize", "freqDevOffset", "freqDevSlope", "harmDevSlope", "hopSize",
                "magnitudeThreshold", "maxFrequency", "maxPeaks", "maxnSines", "minFrequency",
                "nHarmonics", "orderBy", "sampleRate", "stocf",
            ],
        },
        ResampleFFT: Synthesis {
            inputs: ["input"],
            outputs: ["output"],
            parameters: ["inSize", "outSize"],
        },
        SineModelAnal: Synthesis {
            inputs: ["fft"],
            outputs: ["frequencies", "magnitudes", "phases"],
            parameters: [
                "freqDevOffset", "freqDevSlope", "magnitudeThreshold", "maxFrequency", "maxPeaks",
                "maxnSines", "minFrequency", "orderBy", "sampleRate",
            ],
        },
        SineModelSynth: Synthesis {
            inputs: ["magnitudes", "frequencies", "phases"],
            outputs: ["fft"],
            parameters: ["fftSize", "hopSize", "sampleRate"],
        },
        SineSubtraction: Synthesis {
            inputs: ["frame", "magnitudes", "frequencies", "phases"],
            outputs: ["frame"],
            parameters: ["fftSize", "hopSize", "sampleRate"],
        },
        SprModelAnal: Synthesis {
            inputs: ["frame"],
            outputs: ["frequencies", "magnitudes", "phases", "res"],
            parameters: [
                "fftSize", "freqDevOffset", "freqDevSlope", "hopSize", "magnitudeThreshold",
                "maxFrequency", "maxPeaks", "maxnSines", "minFrequency", "orderBy", "sampleRate",
            ],
        },
        SprModelSynth: Synthesis {
            inputs: ["magnitudes", "frequencies", "phases", "res"],
            outputs: ["frame", "sineframe", "resframe"],
            parameters: ["fftSize", "hopSize", "sampleRate"],
        },
        SpsModelAnal: Synthesis {
            inputs: ["frame"],
            outputs: ["frequencies", "magnitudes", "phases", "stocenv"],
            parameters: [
                "fftSize", "freqDevOffset", "freqDevSlope", "hopSize", "magnitudeThreshold",
                "maxFrequency", "maxPeaks", "maxnSines", "minFrequency", "orderBy", "sampleRate",
                "stocf",
            ],
        },
        SpsModelSynth: Synthesis {
            inputs: ["magnitudes", "frequencies", "phases", "stocenv"],
            outputs: ["frame", "sineframe", "stocframe"],
            parameters: ["fftSize", "hopSize", "sampleRate", "stocf"],
        },
        StochasticModelAnal: Synthesis {
            inputs: ["frame"],
            outputs: ["stocenv"],
            parameters: ["fftSize", "hopSize", "sampleRate", "stocf"],
        },
        StochasticModelSynth: Synthesis {
            inputs: ["stocenv"],
            outputs: ["frame"],
            parameters: ["fftSize", "hopSize", "sampleRate", "stocf"],
        },

        // InputOutput
        AudioOnsetsMarker: InputOutput {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["onsets", "sampleRate", "type"],
        },
        /// Source that feeds an in-memory vector into a network
        VectorInput: InputOutput {
            inputs: [],
            outputs: ["data"],
            parameters: [],
        },
        /// Sink that collects a network's tokens into an in-memory vector
        VectorOutput: InputOutput {
            inputs: ["data"],
            outputs: [],
            parameters: [],
        },

        // DurationSilence
        Duration: DurationSilence {
            inputs: ["signal"],
            outputs: ["duration"],
            parameters: ["sampleRate"],
        },
        EffectiveDuration: DurationSilence {
            inputs: ["signal"],
            outputs: ["effectiveDuration"],
            parameters: ["sampleRate", "thresholdRatio"],
        },
        FadeDetection: DurationSilence {
            inputs: ["rms"],
            outputs: ["fadeIn", "fadeOut"],
            parameters: ["cutoffHigh", "cutoffLow", "frameRate", "minLength"],
        },
        SilenceRate: DurationSilence {
            inputs: ["frame"],
            outputs: [],
            parameters: ["thresholds"],
        },
        StartStopSilence: DurationSilence {
            inputs: ["frame"],
            outputs: ["startFrame", "stopFrame"],
            parameters: ["threshold"],
        },

        // LoudnessDynamics
        DynamicComplexity: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["dynamicComplexity", "loudness"],
            parameters: ["frameSize", "sampleRate"],
        },
        Larm: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["larm"],
            parameters: ["attackTime", "power", "releaseTime", "sampleRate"],
        },
        Leq: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["leq"],
            parameters: [],
        },
        LevelExtractor: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["loudness"],
            parameters: ["frameSize", "hopSize"],
        },
        Loudness: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["loudness"],
            parameters: [],
        },
        LoudnessEBUR128: LoudnessDynamics {
            inputs: ["signal"],
            outputs: [
                "momentaryLoudness", "shortTermLoudness", "integratedLoudness", "loudnessRange",
            ],
            parameters: ["hopSize", "sampleRate", "startAtZero"],
        },
        LoudnessVickers: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["loudness"],
            parameters: ["sampleRate"],
        },
        ReplayGain: LoudnessDynamics {
            inputs: ["signal"],
            outputs: ["replayGain"],
            parameters: ["sampleRate"],
        },

        // Filters
        AllPass: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["bandwidth", "cutoffFrequency", "order", "sampleRate"],
        },
        BandPass: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["bandwidth", "cutoffFrequency", "sampleRate"],
        },
        BandReject: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["bandwidth", "cutoffFrequency", "sampleRate"],
        },
        DCRemoval: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["cutoffFrequency", "sampleRate"],
        },
        EqualLoudness: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["sampleRate"],
        },
        HighPass: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["cutoffFrequency", "sampleRate"],
        },
        IIR: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["denominator", "numerator"],
        },
        LowPass: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["cutoffFrequency", "sampleRate"],
        },
        MaxFilter: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["causal", "width"],
        },
        MovingAverage: Filters {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["size"],
        },

        // Standard
        AutoCorrelation: Standard {
            inputs: ["array"],
            outputs: ["autoCorrelation"],
            parameters: ["frequencyDomainCompression", "generalized", "normalization"],
        },
        BPF: Standard {
            inputs: ["x"],
            outputs: ["y"],
            parameters: ["xPoints", "yPoints"],
        },
        BinaryOperator: Standard {
            inputs: ["array1", "array2"],
            outputs: ["array"],
            parameters: ["type"],
        },
        BinaryOperatorStream: Standard {
            inputs: ["array1", "array2"],
            outputs: ["array"],
            parameters: ["type"],
        },
        Clipper: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["max", "min"],
        },
        ConstantQ: Standard {
            inputs: ["frame"],
            outputs: ["constantq"],
            parameters: [
                "binsPerOctave", "minFrequency", "minimumKernelSize", "numberBins", "sampleRate",
                "scale", "threshold", "windowType", "zeroPhase",
            ],
        },
        CrossCorrelation: Standard {
            inputs: ["arrayX", "arrayY"],
            outputs: ["crossCorrelation"],
            parameters: ["maxLag", "minLag"],
        },
        CubicSpline: Standard {
            inputs: ["x"],
            outputs: ["y", "dy", "ddy"],
            parameters: [
                "leftBoundaryFlag", "leftBoundaryValue", "rightBoundaryFlag", "rightBoundaryValue",
                "xPoints", "yPoints",
            ],
        },
        DCT: Standard {
            inputs: ["array"],
            outputs: ["dct"],
            parameters: ["dctType", "inputSize", "liftering", "outputSize"],
        },
        Derivative: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: [],
        },
        FFT: Standard {
            inputs: ["frame"],
            outputs: ["fft"],
            parameters: ["size"],
        },
        FFTC: Standard {
            inputs: ["frame"],
            outputs: ["fft"],
            parameters: ["size"],
        },
        FrameCutter: Standard {
            inputs: ["signal"],
            outputs: ["frame"],
            parameters: [
                "frameSize", "hopSize", "lastFrameToEndOfFile", "silentFrames", "startFromZero",
            ],
        },
        FrameToReal: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["frameSize", "hopSize"],
        },
        IDCT: Standard {
            inputs: ["dct"],
            outputs: ["idct"],
            parameters: ["dctType", "inputSize", "liftering", "outputSize"],
        },
        IFFT: Standard {
            inputs: ["fft"],
            outputs: ["frame"],
            parameters: ["normalize", "size"],
        },
        IFFTC: Standard {
            inputs: ["fft"],
            outputs: ["frame"],
            parameters: ["size"],
        },
        MonoMixer: Standard {
            inputs: ["audio", "numberChannels"],
            outputs: ["audio"],
            parameters: ["type"],
        },
        Multiplexer: Standard {
            inputs: [],
            outputs: ["data"],
            parameters: ["numberRealInputs", "numberVectorRealInputs"],
        },
        NoiseAdder: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["fixSeed", "level"],
        },
        OverlapAdd: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["frameSize", "gain", "hopSize"],
        },
        PeakDetection: Standard {
            inputs: ["array"],
            outputs: ["positions", "amplitudes"],
            parameters: [
                "interpolate", "maxPeaks", "maxPosition", "minPeakDistance", "minPosition",
                "orderBy", "range", "threshold",
            ],
        },
        Scale: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["clipping", "factor", "maxAbsValue"],
        },
        Slicer: Standard {
            inputs: ["audio"],
            outputs: ["frame"],
            parameters: ["endTimes", "sampleRate", "startTimes", "timeUnits"],
        },
        Spline: Standard {
            inputs: ["x"],
            outputs: ["y"],
            parameters: ["beta1", "beta2", "type", "xPoints", "yPoints"],
        },
        StereoDemuxer: Standard {
            inputs: ["audio"],
            outputs: ["left", "right"],
            parameters: [],
        },
        StereoMuxer: Standard {
            inputs: ["left", "right"],
            outputs: ["audio"],
            parameters: [],
        },
        StereoTrimmer: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["checkRange", "endTime", "sampleRate", "startTime"],
        },
        Trimmer: Standard {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["checkRange", "endTime", "sampleRate", "startTime"],
        },
        UnaryOperator: Standard {
            inputs: ["array"],
            outputs: ["array"],
            parameters: ["scale", "shift", "type"],
        },
        UnaryOperatorStream: Standard {
            inputs: ["array"],
            outputs: ["array"],
            parameters: ["scale", "shift", "type"],
        },
        WarpedAutoCorrelation: Standard {
            inputs: ["array"],
            outputs: ["warpedAutoCorrelation"],
            parameters: ["maxLag", "sampleRate"],
        },
        Windowing: Standard {
            inputs: ["frame"],
            outputs: ["frame"],
            parameters: ["normalized", "size", "type", "zeroPadding", "zeroPhase"],
        },
        ZeroCrossingRate: Standard {
            inputs: ["signal"],
            outputs: ["zeroCrossingRate"],
            parameters: ["threshold"],
        },

        // Spectral
        BFCC: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands", "bfcc"],
            parameters: [
                "dctType", "highFrequencyBound", "inputSize", "liftering", "logType",
                "lowFrequencyBound", "normalize", "numberBands", "numberCoefficients", "sampleRate",
                "type", "weighting",
            ],
        },
        BarkBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: ["numberBands", "sampleRate"],
        },
        ERBBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: [
                "highFrequencyBound", "inputSize", "lowFrequencyBound", "numberBands", "sampleRate",
                "type", "width",
            ],
        },
        EnergyBand: Spectral {
            inputs: ["spectrum"],
            outputs: ["energyBand"],
            parameters: ["sampleRate", "startCutoffFrequency", "stopCutoffFrequency"],
        },
        EnergyBandRatio: Spectral {
            inputs: ["spectrum"],
            outputs: ["energyBandRatio"],
            parameters: ["sampleRate", "startFrequency", "stopFrequency"],
        },
        FlatnessDB: Spectral {
            inputs: ["array"],
            outputs: ["flatnessDB"],
            parameters: [],
        },
        Flux: Spectral {
            inputs: ["spectrum"],
            outputs: ["flux"],
            parameters: ["halfRectify", "norm"],
        },
        FrequencyBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: ["frequencyBands", "sampleRate"],
        },
        GFCC: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands", "gfcc"],
            parameters: [
                "dctType", "highFrequencyBound", "inputSize", "logType", "lowFrequencyBound",
                "numberBands", "numberCoefficients", "sampleRate", "silenceThreshold", "type",
            ],
        },
        HFC: Spectral {
            inputs: ["spectrum"],
            outputs: ["hfc"],
            parameters: ["sampleRate", "type"],
        },
        LPC: Spectral {
            inputs: ["frame"],
            outputs: ["lpc", "reflection"],
            parameters: ["order", "sampleRate", "type"],
        },
        MFCC: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands", "mfcc"],
            parameters: [
                "dctType", "highFrequencyBound", "inputSize", "liftering", "logType",
                "lowFrequencyBound", "normalize", "numberBands", "numberCoefficients", "sampleRate",
                "silenceThreshold", "type", "warpingFormula", "weighting",
            ],
        },
        MaxMagFreq: Spectral {
            inputs: ["spectrum"],
            outputs: ["maxMagFreq"],
            parameters: ["sampleRate"],
        },
        MelBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: [
                "highFrequencyBound", "inputSize", "log", "lowFrequencyBound", "normalize",
                "numberBands", "sampleRate", "type", "warpingFormula", "weighting",
            ],
        },
        Panning: Spectral {
            inputs: ["spectrumLeft", "spectrumRight"],
            outputs: ["panningCoeffs"],
            parameters: [
                "averageFrames", "numBands", "numCoeffs", "panningBins", "sampleRate",
                "warpedPanorama",
            ],
        },
        PowerSpectrum: Spectral {
            inputs: ["signal"],
            outputs: ["powerSpectrum"],
            parameters: ["size"],
        },
        RollOff: Spectral {
            inputs: ["spectrum"],
            outputs: ["rollOff"],
            parameters: ["cutoff", "sampleRate"],
        },
        SpectralCentroidTime: Spectral {
            inputs: ["array"],
            outputs: ["centroid"],
            parameters: ["sampleRate"],
        },
        SpectralComplexity: Spectral {
            inputs: ["spectrum"],
            outputs: ["spectralComplexity"],
            parameters: ["magnitudeThreshold", "sampleRate"],
        },
        SpectralContrast: Spectral {
            inputs: ["spectrum"],
            outputs: ["spectralContrast", "spectralValley"],
            parameters: [
                "frameSize", "highFrequencyBound", "lowFrequencyBound", "neighbourRatio",
                "numberBands", "sampleRate", "staticDistribution",
            ],
        },
        SpectralPeaks: Spectral {
            inputs: ["spectrum"],
            outputs: ["frequencies", "magnitudes"],
            parameters: [
                "magnitudeThreshold", "maxFrequency", "maxPeaks", "minFrequency", "orderBy",
                "sampleRate",
            ],
        },
        SpectralWhitening: Spectral {
            inputs: ["spectrum", "frequencies", "magnitudes"],
            outputs: ["magnitudes"],
            parameters: ["maxFrequency", "sampleRate"],
        },
        Spectrum: Spectral {
            inputs: ["frame"],
            outputs: ["spectrum"],
            parameters: ["size"],
        },
        SpectrumToCent: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands", "frequencies"],
            parameters: [
                "bands", "centBinResolution", "inputSize", "log", "minimumFrequency", "normalize",
                "sampleRate", "type",
            ],
        },
        StrongPeak: Spectral {
            inputs: ["spectrum"],
            outputs: ["strongPeak"],
            parameters: [],
        },
        TriangularBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: [
                "frequencyBands", "inputSize", "log", "normalize", "sampleRate", "type",
                "weighting",
            ],
        },
        TriangularBarkBands: Spectral {
            inputs: ["spectrum"],
            outputs: ["bands"],
            parameters: [
                "highFrequencyBound", "inputSize", "log", "lowFrequencyBound", "normalize",
                "numberBands", "sampleRate", "type", "weighting",
            ],
        },

        // Extractors
        LowLevelSpectralEqloudExtractor: Extractors {
            inputs: ["signal"],
            outputs: [
                "dissonance", "sccoeffs", "scvalleys", "spectral_centroid", "spectral_kurtosis",
                "spectral_skewness", "spectral_spread",
            ],
            parameters: ["frameSize", "hopSize", "sampleRate"],
        },
        LowLevelSpectralExtractor: Extractors {
            inputs: ["signal"],
            outputs: [
                "barkbands", "barkbands_kurtosis", "barkbands_skewness", "barkbands_spread", "hfc",
                "mfcc", "pitch", "pitch_instantaneous_confidence", "pitch_salience",
                "silence_rate_20dB", "silence_rate_30dB", "silence_rate_60dB",
                "spectral_complexity", "spectral_crest", "spectral_decrease", "spectral_energy",
                "spectral_energyband_low", "spectral_energyband_middle_low",
                "spectral_energyband_middle_high", "spectral_energyband_high",
                "spectral_flatness_db", "spectral_flux", "spectral_rms", "spectral_rolloff",
                "spectral_strongpeak", "zerocrossingrate", "inharmonicity", "tristimulus",
                "oddtoevenharmonicenergyratio",
            ],
            parameters: ["frameSize", "hopSize", "sampleRate"],
        },

        // EnvelopeSfx
        AfterMaxToBeforeMaxEnergyRatio: EnvelopeSfx {
            inputs: ["pitch"],
            outputs: ["afterMaxToBeforeMaxEnergyRatio"],
            parameters: [],
        },
        DerivativeSFX: EnvelopeSfx {
            inputs: ["envelope"],
            outputs: ["derAvAfterMax", "maxDerBeforeMax"],
            parameters: [],
        },
        Envelope: EnvelopeSfx {
            inputs: ["signal"],
            outputs: ["signal"],
            parameters: ["applyRectification", "attackTime", "releaseTime", "sampleRate"],
        },
        FlatnessSFX: EnvelopeSfx {
            inputs: ["envelope"],
            outputs: ["flatness"],
            parameters: [],
        },
        LogAttackTime: EnvelopeSfx {
            inputs: ["signal"],
            outputs: ["logAttackTime", "attackStart", "attackStop"],
            parameters: ["sampleRate", "startAttackThreshold", "stopAttackThreshold"],
        },
        MaxToTotal: EnvelopeSfx {
            inputs: ["envelope"],
            outputs: ["maxToTotal"],
            parameters: [],
        },
        MinToTotal: EnvelopeSfx {
            inputs: ["envelope"],
            outputs: ["minToTotal"],
            parameters: [],
        },
        StrongDecay: EnvelopeSfx {
            inputs: ["signal"],
            outputs: ["strongDecay"],
            parameters: ["sampleRate"],
        },
        TCToTotal: EnvelopeSfx {
            inputs: ["envelope"],
            outputs: ["TCToTotal"],
            parameters: [],
        },

        // Math
        CartesianToPolar: Math {
            inputs: ["complex"],
            outputs: ["magnitude", "phase"],
            parameters: [],
        },
        Magnitude: Math {
            inputs: ["complex"],
            outputs: ["magnitude"],
            parameters: [],
        },
        PolarToCartesian: Math {
            inputs: ["magnitude", "phase"],
            outputs: ["complex"],
            parameters: [],
        },

        // Statistics
        CentralMoments: Statistics {
            inputs: ["array"],
            outputs: ["centralMoments"],
            parameters: ["mode", "range"],
        },
        Centroid: Statistics {
            inputs: ["array"],
            outputs: ["centroid"],
            parameters: ["range"],
        },
        Crest: Statistics {
            inputs: ["array"],
            outputs: ["crest"],
            parameters: [],
        },
        Decrease: Statistics {
            inputs: ["array"],
            outputs: ["decrease"],
            parameters: ["range"],
        },
        DistributionShape: Statistics {
            inputs: ["centralMoments"],
            outputs: ["spread", "skewness", "kurtosis"],
            parameters: [],
        },
        Energy: Statistics {
            inputs: ["array"],
            outputs: ["energy"],
            parameters: [],
        },
        Entropy: Statistics {
            inputs: ["array"],
            outputs: ["entropy"],
            parameters: [],
        },
        Flatness: Statistics {
            inputs: ["array"],
            outputs: ["flatness"],
            parameters: [],
        },
        GeometricMean: Statistics {
            inputs: ["array"],
            outputs: ["geometricMean"],
            parameters: [],
        },
        InstantPower: Statistics {
            inputs: ["array"],
            outputs: ["power"],
            parameters: [],
        },
        Mean: Statistics {
            inputs: ["array"],
            outputs: ["mean"],
            parameters: [],
        },
        Median: Statistics {
            inputs: ["array"],
            outputs: ["median"],
            parameters: [],
        },
        PowerMean: Statistics {
            inputs: ["array"],
            outputs: ["powerMean"],
            parameters: ["power"],
        },
        RMS: Statistics {
            inputs: ["array"],
            outputs: ["rms"],
            parameters: [],
        },
        RawMoments: Statistics {
            inputs: ["array"],
            outputs: ["rawMoments"],
            parameters: ["range"],
        },
        SingleGaussian: Statistics {
            inputs: ["matrix"],
            outputs: ["mean", "covariance", "inverseCovariance"],
            parameters: [],
        },
        Variance: Statistics {
            inputs: ["array"],
            outputs: ["variance"],
            parameters: [],
        },

        // Tonal
        ChordsDescriptors: Tonal {
            inputs: ["chords", "key", "scale"],
            outputs: [
                "chordsHistogram", "chordsNumberRate", "chordsChangesRate", "chordsKey",
                "chordsScale",
            ],
            parameters: [],
        },
        ChordsDetection: Tonal {
            inputs: ["pcp"],
            outputs: ["chords", "strength"],
            parameters: ["hopSize", "sampleRate", "windowSize"],
        },
        Chromagram: Tonal {
            inputs: ["frame"],
            outputs: ["chromagram"],
            parameters: [
                "binsPerOctave", "minFrequency", "minimumKernelSize", "normalizeType", "numberBins",
                "sampleRate", "scale", "threshold", "windowType", "zeroPhase",
            ],
        },
        Dissonance: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["dissonance"],
            parameters: [],
        },
        HPCP: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["hpcp"],
            parameters: [
                "bandPreset", "bandSplitFrequency", "harmonics", "maxFrequency", "maxShifted",
                "minFrequency", "nonLinear", "normalized", "referenceFrequency", "sampleRate",
                "size", "weightType", "windowSize",
            ],
        },
        HarmonicPeaks: Tonal {
            inputs: ["frequencies", "magnitudes", "pitch"],
            outputs: ["harmonicFrequencies", "harmonicMagnitudes"],
            parameters: ["maxHarmonics", "tolerance"],
        },
        HighResolutionFeatures: Tonal {
            inputs: ["hpcp"],
            outputs: [
                "equalTemperedDeviation", "nonTemperedEnergyRatio", "nonTemperedPeaksEnergyRatio",
            ],
            parameters: ["maxPeaks"],
        },
        Inharmonicity: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["inharmonicity"],
            parameters: [],
        },
        Key: Tonal {
            inputs: ["pcp"],
            outputs: ["key", "scale", "strength", "firstToSecondRelativeStrength"],
            parameters: [
                "numHarmonics", "pcpSize", "profileType", "slope", "useMajMin", "usePolyphony",
                "useThreeChords",
            ],
        },
        KeyExtractor: Tonal {
            inputs: ["audio"],
            outputs: ["key", "scale", "strength"],
            parameters: [
                "averageDetuningCorrection", "frameSize", "hopSize", "hpcpSize", "maxFrequency",
                "maximumSpectralPeaks", "minFrequency", "pcpThreshold", "profileType", "sampleRate",
                "spectralPeaksThreshold", "tuningFrequency", "weightType", "windowType",
            ],
        },
        OddToEvenHarmonicEnergyRatio: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["oddToEvenHarmonicEnergyRatio"],
            parameters: [],
        },
        PitchSalience: Tonal {
            inputs: ["spectrum"],
            outputs: ["pitchSalience"],
            parameters: ["highBoundary", "lowBoundary", "sampleRate"],
        },
        SpectrumCQ: Tonal {
            inputs: ["frame"],
            outputs: ["spectrumCQ"],
            parameters: [
                "binsPerOctave", "minFrequency", "minimumKernelSize", "numberBins", "sampleRate",
                "scale", "threshold", "windowType", "zeroPhase",
            ],
        },
        TonalExtractor: Tonal {
            inputs: ["signal"],
            outputs: [
                "chords_changes_rate", "chords_histogram", "chords_key", "chords_number_rate",
                "chords_progression", "chords_scale", "chords_strength", "hpcp", "hpcp_highres",
                "key_key", "key_scale", "key_strength",
            ],
            parameters: ["frameSize", "hopSize", "tuningFrequency"],
        },
        Tristimulus: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["tristimulus"],
            parameters: [],
        },
        TuningFrequency: Tonal {
            inputs: ["frequencies", "magnitudes"],
            outputs: ["tuningFrequency", "tuningCents"],
            parameters: ["resolution"],
        },
        TuningFrequencyExtractor: Tonal {
            inputs: ["signal"],
            outputs: ["tuningFrequency"],
            parameters: ["frameSize", "hopSize"],
        },

        // Segmentation
        SBic: Segmentation {
            inputs: ["features"],
            outputs: ["segmentation"],
            parameters: ["cpw", "inc1", "inc2", "minLength", "size1", "size2"],
        },
    }
}
